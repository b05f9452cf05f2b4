//! Heuristic scoring of a single candidate cell
//!
//! The score of an empty cell for the side to move is decided in order:
//! 1. The cell completes five for the mover: `win`, nothing else looked at
//! 2. The cell completes five for the opponent: `block`
//! 3. Otherwise the mover's shapes plus the opponent's shapes scaled by
//!    `defense_bias`, plus a positional bonus toward the center
//!
//! The function is deterministic; tie-breaking lives in the engine.

use crate::board::{Board, Direction, Pos, Stone, MAX_CENTER_DIST};
use crate::config::ScoringConfig;
use crate::rules::has_five_at_pos;

use super::patterns::ShapeCounts;
use super::scan::LineScan;

/// Which step of the scoring decided a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    /// The mover wins by playing here
    Win,
    /// The opponent would win by playing here
    Block,
    /// Weighted shapes and position
    Shapes,
}

/// Score of one cell and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScore {
    pub score: f64,
    pub kind: ScoreKind,
}

/// Score an empty cell for `color`. Higher is better for `color`.
///
/// `pos` must be empty; an occupied cell is scored as if it were empty.
#[must_use]
pub fn score_position(board: &Board, pos: Pos, color: Stone, weights: &ScoringConfig) -> f64 {
    evaluate_cell(board, pos, color, weights).score
}

/// Like [`score_position`], also reporting which step decided the score.
#[must_use]
pub fn evaluate_cell(board: &Board, pos: Pos, color: Stone, weights: &ScoringConfig) -> CellScore {
    let opponent = color.opponent();

    if has_five_at_pos(board, pos, color) {
        return CellScore {
            score: weights.win,
            kind: ScoreKind::Win,
        };
    }

    if has_five_at_pos(board, pos, opponent) {
        return CellScore {
            score: weights.block,
            kind: ScoreKind::Block,
        };
    }

    let own = shape_counts(board, pos, color);
    let theirs = shape_counts(board, pos, opponent);

    let score = shape_score(&own, weights)
        + shape_score(&theirs, weights) * weights.defense_bias
        + positional_score(pos, weights);

    CellScore {
        score,
        kind: ScoreKind::Shapes,
    }
}

/// Shapes `color` would hold through `pos` after playing there
#[must_use]
pub fn shape_counts(board: &Board, pos: Pos, color: Stone) -> ShapeCounts {
    let scans = Direction::ALL.map(|dir| LineScan::new(board, pos, dir, color));
    ShapeCounts::from_scans(&scans)
}

/// Weighted value of one player's shapes.
///
/// Two open threes outrank a single one, and a closed three backed by an
/// open two outranks either alone; see [`ScoringConfig`] for the ladder.
/// Combinations are scored once and the remaining shapes are added on top,
/// so adding a shape to a set always raises its score.
#[must_use]
pub fn shape_score(counts: &ShapeCounts, w: &ScoringConfig) -> f64 {
    let mut score = f64::from(counts.five) * w.five
        + f64::from(counts.open_four) * w.open_four
        + f64::from(counts.closed_four) * w.closed_four
        + graded(counts.open_three, w.open_three, w.double_open_three);

    let (closed_three, open_two) = if counts.closed_three > 0 && counts.open_two > 0 {
        score += w.closed_three_open_two;
        (counts.closed_three - 1, counts.open_two - 1)
    } else {
        (counts.closed_three, counts.open_two)
    };

    score += f64::from(closed_three) * w.closed_three
        + graded(open_two, w.open_two, w.double_open_two);

    score + f64::from(counts.closed_two) * w.closed_two
}

/// `single` for one shape, `double` for a pair, then `single` per extra one
fn graded(count: u32, single: f64, double: f64) -> f64 {
    match count {
        0 => 0.0,
        1 => single,
        n => double + f64::from(n - 2) * single,
    }
}

/// Center bonus, less an edge penalty on the outer ring
#[must_use]
pub fn positional_score(pos: Pos, w: &ScoringConfig) -> f64 {
    let mut score = f64::from(MAX_CENTER_DIST - pos.center_distance()) * w.center_weight;
    if pos.is_edge() {
        score -= w.edge_penalty;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.place_at(Pos::new(r, c), s).unwrap();
        }
        board
    }

    fn row(r: u8, cols: impl IntoIterator<Item = u8>, s: Stone) -> Vec<(u8, u8, Stone)> {
        cols.into_iter().map(|c| (r, c, s)).collect()
    }

    #[test]
    fn test_empty_board_prefers_center() {
        let board = Board::new();
        let w = ScoringConfig::default();
        let center = score_position(&board, Pos::center(), Stone::Black, &w);
        let off = score_position(&board, Pos::new(6, 7), Stone::Black, &w);
        let corner = score_position(&board, Pos::new(0, 0), Stone::Black, &w);
        assert!(center > off && off > corner);
        assert_eq!(center, 42.0);
        assert_eq!(corner, -10.0);
    }

    #[test]
    fn test_positional_score_monotonic() {
        let w = ScoringConfig::default();
        let mut last = f64::INFINITY;
        for d in 0..=7u8 {
            let s = positional_score(Pos::new(7, 7 + d), &w);
            assert!(s < last, "distance {d} scored {s}, not below {last}");
            last = s;
        }
    }

    #[test]
    fn test_immediate_win() {
        let board = board_with(&row(7, 3..7, Stone::White));
        let w = ScoringConfig::default();
        let cell = evaluate_cell(&board, Pos::new(7, 7), Stone::White, &w);
        assert_eq!(cell.kind, ScoreKind::Win);
        assert_eq!(cell.score, w.win);
    }

    #[test]
    fn test_immediate_block() {
        let board = board_with(&row(7, 3..7, Stone::White));
        let w = ScoringConfig::default();
        let cell = evaluate_cell(&board, Pos::new(7, 7), Stone::Black, &w);
        assert_eq!(cell.kind, ScoreKind::Block);
        assert_eq!(cell.score, w.block);
    }

    #[test]
    fn test_win_dominates_block_on_same_cell() {
        // Black's four on row 7 and White's four on column 7 meet at (7, 7)
        let mut stones = row(7, 3..7, Stone::Black);
        stones.extend((3..7).map(|r| (r, 7, Stone::White)));
        let board = board_with(&stones);
        let w = ScoringConfig::default();

        assert_eq!(
            evaluate_cell(&board, Pos::new(7, 7), Stone::Black, &w).kind,
            ScoreKind::Win
        );
        assert_eq!(
            evaluate_cell(&board, Pos::new(7, 7), Stone::White, &w).kind,
            ScoreKind::Win
        );
    }

    #[test]
    fn test_gap_completion_is_win() {
        // OO_OO: filling the gap wins
        let mut stones = row(4, [2, 3], Stone::Black);
        stones.extend(row(4, [5, 6], Stone::Black));
        let board = board_with(&stones);
        let w = ScoringConfig::default();
        assert_eq!(
            evaluate_cell(&board, Pos::new(4, 4), Stone::Black, &w).kind,
            ScoreKind::Win
        );
    }

    #[test]
    fn test_open_three_scores_above_two() {
        let w = ScoringConfig::default();
        // Extending _OO_ to _OOO_
        let three = board_with(&row(7, [5, 6], Stone::Black));
        // Extending _O_ to _OO_
        let two = board_with(&row(7, [6], Stone::Black));
        let s3 = score_position(&three, Pos::new(7, 7), Stone::Black, &w);
        let s2 = score_position(&two, Pos::new(7, 7), Stone::Black, &w);
        assert!(s3 > s2);
        assert_eq!(s3 - positional_score(Pos::new(7, 7), &w), w.open_three);
    }

    #[test]
    fn test_defense_bias_prefers_blocking_equal_shape() {
        // Black open two at row 3, White open two at row 11, same distance
        // from the center. Black to move should extend toward White's shape.
        let mut stones = row(3, [6, 7], Stone::Black);
        stones.extend(row(11, [6, 7], Stone::White));
        let board = board_with(&stones);
        let w = ScoringConfig::default();

        let attack = score_position(&board, Pos::new(3, 8), Stone::Black, &w);
        let defend = score_position(&board, Pos::new(11, 8), Stone::Black, &w);
        assert!(defend > attack, "defend {defend} should beat attack {attack}");
    }

    #[test]
    fn test_shape_ladder() {
        let w = ScoringConfig::default();
        let counts = |f: fn(&mut ShapeCounts)| {
            let mut c = ShapeCounts::default();
            f(&mut c);
            shape_score(&c, &w)
        };
        let ladder = [
            counts(|c| c.five = 1),
            counts(|c| c.open_four = 1),
            counts(|c| c.closed_four = 1),
            counts(|c| c.open_three = 2),
            counts(|c| c.open_three = 1),
            counts(|c| {
                c.closed_three = 1;
                c.open_two = 1;
            }),
            counts(|c| c.closed_three = 1),
            counts(|c| c.open_two = 2),
            counts(|c| c.open_two = 1),
            counts(|c| c.closed_two = 1),
            counts(|_| {}),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] > pair[1], "ladder broken: {:?}", ladder);
        }
    }

    /// Every shape set a cell can hold: at most one shape per axis
    fn all_shape_sets() -> Vec<ShapeCounts> {
        let mut sets = Vec::new();
        for mask in 0u32..8u32.pow(4) {
            let mut counts = ShapeCounts::default();
            for axis in 0..4 {
                let slot = match (mask >> (3 * axis)) & 7 {
                    0 => continue,
                    1 => &mut counts.five,
                    2 => &mut counts.open_four,
                    3 => &mut counts.closed_four,
                    4 => &mut counts.open_three,
                    5 => &mut counts.closed_three,
                    6 => &mut counts.open_two,
                    _ => &mut counts.closed_two,
                };
                *slot += 1;
            }
            sets.push(counts);
        }
        sets
    }

    fn assert_adding_a_shape_raises_score(w: &ScoringConfig) {
        let add: [fn(&mut ShapeCounts); 7] = [
            |c| c.five += 1,
            |c| c.open_four += 1,
            |c| c.closed_four += 1,
            |c| c.open_three += 1,
            |c| c.closed_three += 1,
            |c| c.open_two += 1,
            |c| c.closed_two += 1,
        ];
        for base in all_shape_sets() {
            let total = base.five
                + base.open_four
                + base.closed_four
                + base.open_three
                + base.closed_three
                + base.open_two
                + base.closed_two;
            if total >= 4 {
                continue;
            }
            for f in add {
                let mut more = base;
                f(&mut more);
                let (before, after) = (shape_score(&base, w), shape_score(&more, w));
                assert!(after > before, "{more:?} scored {after}, not above {base:?} at {before}");
            }
        }
    }

    #[test]
    fn test_adding_a_shape_raises_score() {
        assert_adding_a_shape_raises_score(&ScoringConfig::default());
    }

    #[test]
    fn test_adding_a_shape_raises_score_for_any_valid_table() {
        let w = ScoringConfig {
            closed_three: 2_900.0,
            ..ScoringConfig::default()
        };
        w.validate().unwrap();
        assert_adding_a_shape_raises_score(&w);

        let threes = ShapeCounts {
            closed_three: 2,
            ..ShapeCounts::default()
        };
        let threes_and_open_two = ShapeCounts {
            open_two: 1,
            ..threes
        };
        assert!(shape_score(&threes_and_open_two, &w) > shape_score(&threes, &w));
    }

    #[test]
    fn test_block_outranks_any_shape_total() {
        let w = ScoringConfig::default();
        let all_fours = ShapeCounts {
            open_four: 4,
            ..ShapeCounts::default()
        };
        let worst = shape_score(&all_fours, &w) * (1.0 + w.defense_bias)
            + positional_score(Pos::center(), &w);
        assert!(w.block > worst);
    }

    #[test]
    fn test_symmetric_under_color_swap() {
        let board = board_with(&[
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (6, 6, Stone::Black),
            (5, 5, Stone::Black),
            (9, 9, Stone::Black),
        ]);
        let swapped = board.swapped_colors();
        let w = ScoringConfig::default();

        for pos in board.empty_cells() {
            let a = evaluate_cell(&board, pos, Stone::Black, &w);
            let b = evaluate_cell(&swapped, pos, Stone::White, &w);
            assert_eq!(a, b, "mismatch at {pos}");
        }
    }
}
