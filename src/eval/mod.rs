//! Evaluation module for Gomoku positions
//!
//! This module scores empty cells for the computer player:
//! - [`scan`]: what lies along one axis around a cell
//! - [`patterns`]: open/closed runs of two to five
//! - [`heuristic`]: immediate win/block checks, weighted shapes and
//!   positional bonus

pub mod heuristic;
pub mod patterns;
pub mod scan;

pub use heuristic::{evaluate_cell, score_position, CellScore, ScoreKind};
pub use patterns::{classify, Shape, ShapeCounts};
pub use scan::{LineScan, Marker, SCAN_RADIUS};
