//! Win condition checking
//!
//! The check starts from the stone that was just placed and walks each of
//! the four axes in both senses, counting that stone once.

use crate::board::{Board, Direction, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Contiguous stones of `color` through `pos` along `dir`, counting `pos`
/// itself whatever it currently holds.
///
/// Returns `(behind, ahead)`: the cells of the run on the negative side,
/// nearest first, and on the positive side, nearest first.
fn run_cells(board: &Board, pos: Pos, dir: Direction, color: Stone) -> (Vec<Pos>, Vec<Pos>) {
    let walk = |sign: i32| {
        (1..)
            .map_while(|i| pos.offset(dir, sign * i))
            .take_while(|&p| board.stone_at(p) == color)
            .collect::<Vec<_>>()
    };
    (walk(-1), walk(1))
}

/// Length of the run of `color` through `pos` along `dir`, with `pos`
/// counted as if it held `color`.
#[must_use]
pub fn run_length(board: &Board, pos: Pos, dir: Direction, color: Stone) -> usize {
    let (behind, ahead) = run_cells(board, pos, dir, color);
    1 + behind.len() + ahead.len()
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position.
#[inline]
#[must_use]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, pos, dir, color) >= WIN_LENGTH)
}

/// Cells of every run of five or more through `pos` for `color`.
///
/// Each winning axis contributes its cells from the negative end to the
/// positive end; `pos` appears once even when several axes win. Returns
/// `None` when no axis holds a five.
#[must_use]
pub fn find_winning_cells(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    let mut cells: Vec<Pos> = Vec::new();

    for dir in Direction::ALL {
        let (behind, ahead) = run_cells(board, pos, dir, color);
        if 1 + behind.len() + ahead.len() < WIN_LENGTH {
            continue;
        }
        let line = behind
            .into_iter()
            .rev()
            .chain(std::iter::once(pos))
            .chain(ahead);
        for p in line {
            if !cells.contains(&p) {
                cells.push(p);
            }
        }
    }

    (!cells.is_empty()).then_some(cells)
}
