//! Board structure with checked placement

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::GameError;

/// Game board
///
/// A cell is set in at most one of the two bitboards, so every cell holds
/// exactly one [`Stone`] value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Place a stone for a player.
    ///
    /// Fails with `InvalidPosition` off the board, `CellOccupied` on a
    /// non-empty cell and `EmptyStone` for `Stone::Empty`. The board is left
    /// untouched on failure.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, GameError> {
        let pos = Pos::try_new(row, col)?;
        self.place_at(pos, stone)?;
        Ok(pos)
    }

    /// Same as [`Board::place`] for an already validated position.
    pub fn place_at(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if !self.is_empty_at(pos) {
            return Err(GameError::CellOccupied {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
            });
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return Err(GameError::EmptyStone),
        }
        Ok(())
    }

    /// Get stone at caller-supplied coordinates
    pub fn get(&self, row: i32, col: i32) -> Result<Stone, GameError> {
        Pos::try_new(row, col).map(|pos| self.stone_at(pos))
    }

    /// Check if caller-supplied coordinates are empty
    pub fn is_empty(&self, row: i32, col: i32) -> Result<bool, GameError> {
        Pos::try_new(row, col).map(|pos| self.is_empty_at(pos))
    }

    /// Get stone at position
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let occupied = self.black.union(&self.white);
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| !occupied.get(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// The same position with the colors exchanged
    pub fn swapped_colors(&self) -> Board {
        Board {
            black: self.white,
            white: self.black,
        }
    }
}
