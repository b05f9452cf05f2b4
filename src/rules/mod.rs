//! Game rules for freestyle Gomoku
//!
//! A game is won by five or more stones in a row along any axis. Overlines
//! count, and there are no forbidden moves or captures.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_cells, has_five_at_pos, run_length, WIN_LENGTH};
