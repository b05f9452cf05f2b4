//! Computer player
//!
//! The engine scores every empty cell with the position heuristic, keeps
//! every cell that reaches the best score and picks one of them uniformly at
//! random. There is no look-ahead: one move costs at most 225 cell
//! evaluations of four constant-radius scans each.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place(7, 7, Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
//! println!("White plays {} ({:?})", result.best_move, result.search_type);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::ScoringConfig;
use crate::error::GameError;
use crate::eval::{evaluate_cell, ScoreKind};

/// Which scoring step decided the chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The move completes five
    ImmediateWin,
    /// The move stops the opponent completing five
    Defense,
    /// Best weighted shape and position score
    Heuristic,
}

impl From<ScoreKind> for SearchType {
    fn from(kind: ScoreKind) -> Self {
        match kind {
            ScoreKind::Win => SearchType::ImmediateWin,
            ScoreKind::Block => SearchType::Defense,
            ScoreKind::Shapes => SearchType::Heuristic,
        }
    }
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen cell
    pub best_move: Pos,
    /// Heuristic score of the chosen cell
    pub score: f64,
    /// Scoring step that decided the move
    pub search_type: SearchType,
    /// Number of cells sharing the best score
    pub ties: usize,
    /// Number of empty cells scored
    pub cells_scored: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Heuristic computer player.
///
/// The random tie-break is the only nondeterminism; [`AIEngine::with_seed`]
/// makes it reproducible.
pub struct AIEngine {
    weights: ScoringConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with default weights, seeded from the OS
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Engine with custom weights, seeded from the OS
    #[must_use]
    pub fn with_config(weights: ScoringConfig) -> Self {
        Self {
            weights,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with default weights and a fixed tie-break seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config_and_seed(ScoringConfig::default(), seed)
    }

    #[must_use]
    pub fn with_config_and_seed(weights: ScoringConfig, seed: u64) -> Self {
        Self {
            weights,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn weights(&self) -> &ScoringConfig {
        &self.weights
    }

    /// Best cell for `color`.
    ///
    /// Fails with [`GameError::NoLegalMove`] on a full board.
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Result<Pos, GameError> {
        self.get_move_with_stats(board, color).map(|r| r.best_move)
    }

    /// Best cell for `color` with the score and tie statistics.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        color: Stone,
    ) -> Result<MoveResult, GameError> {
        if !color.is_player() {
            return Err(GameError::EmptyStone);
        }
        let start = Instant::now();

        let mut best_score = f64::NEG_INFINITY;
        let mut best_kind = ScoreKind::Shapes;
        let mut best_moves: Vec<Pos> = Vec::new();
        let mut cells_scored = 0;

        for pos in board.empty_cells() {
            cells_scored += 1;
            let cell = evaluate_cell(board, pos, color, &self.weights);
            if cell.score > best_score {
                best_score = cell.score;
                best_kind = cell.kind;
                best_moves.clear();
                best_moves.push(pos);
            } else if cell.score == best_score {
                best_moves.push(pos);
            }
        }

        let best_move = *best_moves
            .choose(&mut self.rng)
            .ok_or(GameError::NoLegalMove)?;

        let result = MoveResult {
            best_move,
            score: best_score,
            search_type: best_kind.into(),
            ties: best_moves.len(),
            cells_scored,
            time_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            %color,
            pos = %result.best_move,
            score = result.score,
            kind = ?result.search_type,
            ties = result.ties,
            time_ms = result.time_ms,
            "engine chose move"
        );
        Ok(result)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_row(board: &mut Board, row: i32, cols: std::ops::Range<i32>, stone: Stone) {
        for c in cols {
            board.place(row, c, stone).unwrap();
        }
    }

    #[test]
    fn test_engine_empty_board_plays_center() {
        let board = Board::new();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Pos::center());
        assert_eq!(result.ties, 1);
        assert_eq!(result.cells_scored, 225);
        assert_eq!(result.search_type, SearchType::Heuristic);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        place_row(&mut board, 9, 0..4, Stone::Black);
        board.place(3, 3, Stone::White).unwrap();

        let mut engine = AIEngine::with_seed(1);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();

        assert_eq!(result.best_move, Pos::new(9, 4));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        place_row(&mut board, 9, 0..4, Stone::White);
        board.place(10, 5, Stone::Black).unwrap();

        let mut engine = AIEngine::with_seed(1);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();

        assert_eq!(result.best_move, Pos::new(9, 4));
        assert_eq!(result.search_type, SearchType::Defense);
    }

    #[test]
    fn test_win_preferred_over_block_elsewhere() {
        let mut board = Board::new();
        // White threatens (9, 4); Black can win at (2, 12) instead
        place_row(&mut board, 9, 0..4, Stone::White);
        place_row(&mut board, 2, 8..12, Stone::Black);

        let mut engine = AIEngine::with_seed(3);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert!(
            result.best_move == Pos::new(2, 12) || result.best_move == Pos::new(2, 7),
            "unexpected move {}",
            result.best_move
        );
    }

    #[test]
    fn test_ties_are_collected() {
        let mut board = Board::new();
        board.place(7, 7, Stone::Black).unwrap();

        // The four orthogonal neighbours and the four diagonal ones are
        // pairwise equivalent; the best set is never a single cell.
        let mut engine = AIEngine::with_seed(11);
        let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
        assert!(result.ties > 1, "expected a tie set, got {:?}", result);
    }

    #[test]
    fn test_tie_break_is_reproducible_with_seed() {
        let mut board = Board::new();
        board.place(7, 7, Stone::Black).unwrap();

        let a = AIEngine::with_seed(42).get_move(&board, Stone::White).unwrap();
        let b = AIEngine::with_seed(42).get_move(&board, Stone::White).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tie_break_covers_the_tie_set() {
        let mut board = Board::new();
        board.place(7, 7, Stone::Black).unwrap();

        let mut engine = AIEngine::with_seed(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(engine.get_move(&board, Stone::White).unwrap());
        }
        let ties = engine.get_move_with_stats(&board, Stone::White).unwrap().ties;
        assert_eq!(seen.len(), ties);
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let mut board = Board::new();
        for pos in (0..225).map(Pos::from_index) {
            // Two-by-two column stripes never line up five
            let stone = if (pos.col / 2 + pos.row) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_at(pos, stone).unwrap();
        }
        let mut engine = AIEngine::new();
        assert_eq!(
            engine.get_move(&board, Stone::Black),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_empty_stone_rejected() {
        let mut engine = AIEngine::new();
        assert_eq!(
            engine.get_move(&Board::new(), Stone::Empty),
            Err(GameError::EmptyStone)
        );
    }

    #[test]
    fn test_search_type_from_kind() {
        assert_eq!(SearchType::from(ScoreKind::Win), SearchType::ImmediateWin);
        assert_eq!(SearchType::from(ScoreKind::Block), SearchType::Defense);
        assert_eq!(SearchType::from(ScoreKind::Shapes), SearchType::Heuristic);
    }
}
