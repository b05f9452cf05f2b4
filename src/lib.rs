//! Heuristic Gomoku engine
//!
//! Freestyle Gomoku for two players, or one player against a one-ply
//! heuristic computer:
//! - 15x15 board, Black moves first
//! - Five or more in a row wins (overlines count)
//! - No captures, no forbidden moves, no draws by rule
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Line scans, shape classification and cell scoring
//! - [`engine`]: Computer player picking the best scored cell
//! - [`game`]: Game session with turn order and move validation
//! - [`config`]: Scoring weights loadable from TOML
//! - [`cli`] and [`ui`]: Command line and egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, GameSession, Stone};
//!
//! let mut game = GameSession::new();
//! let mut engine = AIEngine::with_seed(1);
//!
//! game.apply_move(7, 7, Stone::Black).unwrap();
//!
//! // Computer answers as White
//! let pos = game.compute_ai_move(&mut engine).unwrap();
//! let outcome = game
//!     .apply_move(i32::from(pos.row), i32::from(pos.col), Stone::White)
//!     .unwrap();
//! assert!(outcome.accepted);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Move Priority
//!
//! Every empty cell is scored for the side to move:
//! 1. A cell that completes five wins outright
//! 2. A cell where the opponent would complete five is blocked
//! 3. Otherwise own shapes, opponent shapes weighted by a defensive bias,
//!    and a pull toward the center decide
//!
//! Equal best scores are broken uniformly at random.

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, BOARD_SIZE};
pub use config::ScoringConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use game::{GameSession, GameStatus, MoveOutcome};
