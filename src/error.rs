//! Error types for moves and configuration
//!
//! Every variant of [`GameError`] is a rejected request: the board and the
//! session are exactly as they were before the failing call.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Stone;

/// A move or query the rule engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinates outside the board
    #[error("position ({row}, {col}) is outside the board")]
    InvalidPosition { row: i32, col: i32 },
    /// Placement on a non-empty cell
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: i32, col: i32 },
    /// Placement after the game was won
    #[error("the game is already over, {winner} won")]
    GameAlreadyOver { winner: Stone },
    /// No empty cell remains for the computer
    #[error("no legal move remains")]
    NoLegalMove,
    /// The move was submitted for the player who is not to move
    #[error("{got} tried to move but it is {expected}'s turn")]
    OutOfTurn { expected: Stone, got: Stone },
    /// `Stone::Empty` is not a player
    #[error("cannot place an empty stone")]
    EmptyStone,
    /// Only the fixed 15x15 board is supported
    #[error("unsupported board size {0}")]
    UnsupportedBoardSize(usize),
}

/// Failure to load or validate a scoring table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid scoring config: {0}")]
    Invalid(String),
}
