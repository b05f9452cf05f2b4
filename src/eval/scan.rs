//! Line scanning around a candidate cell
//!
//! A [`LineScan`] describes what lies along one axis on both sides of an
//! empty origin cell, seen from one player. The board edge and the
//! opponent's stones are the same thing to a scan: both stop a run for good.

use crate::board::{Board, Direction, Pos, Stone};

/// Cells inspected on each side of the origin
pub const SCAN_RADIUS: usize = 4;

/// What a scanned cell means to the scanning player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The player's own stone
    Own,
    /// Empty cell
    Empty,
    /// Opponent stone, the board edge, or anything past either
    Blocked,
}

/// One side of a scan, nearest cell first.
pub type SideWindow = [Marker; SCAN_RADIUS];

/// Both sides of one axis around an origin cell.
///
/// The origin is not part of either window; it is the empty cell being
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Negative sense of the axis
    pub behind: SideWindow,
    /// Positive sense of the axis
    pub ahead: SideWindow,
}

impl LineScan {
    /// Scan `dir` through `origin` for `player`.
    ///
    /// On each side the walk stops at the first blocking cell; every cell
    /// past it is reported as [`Marker::Blocked`] without being inspected.
    #[must_use]
    pub fn new(board: &Board, origin: Pos, dir: Direction, player: Stone) -> Self {
        Self {
            behind: scan_side(board, origin, dir, -1, player),
            ahead: scan_side(board, origin, dir, 1, player),
        }
    }

    /// Build a scan directly from two windows
    #[must_use]
    pub const fn from_windows(behind: SideWindow, ahead: SideWindow) -> Self {
        Self { behind, ahead }
    }
}

fn scan_side(board: &Board, origin: Pos, dir: Direction, sign: i32, player: Stone) -> SideWindow {
    let mut window = [Marker::Blocked; SCAN_RADIUS];
    for (i, slot) in window.iter_mut().enumerate() {
        let Some(pos) = origin.offset(dir, sign * (i as i32 + 1)) else {
            break;
        };
        *slot = match board.stone_at(pos) {
            s if s == player => Marker::Own,
            Stone::Empty => Marker::Empty,
            _ => break,
        };
    }
    window
}
