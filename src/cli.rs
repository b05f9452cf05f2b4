//! Command-line interface for the Gomoku GUI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::board::Stone;
use crate::ui::GameMode;

/// Gomoku - freestyle five-in-a-row against a heuristic computer
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Freestyle Gomoku on a 15x15 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays whom
    #[arg(short, long, value_enum, default_value_t = ModeArg::Pve)]
    pub mode: ModeArg,

    /// Human color against the computer
    #[arg(long, value_enum, default_value_t = ColorArg::Black)]
    pub human: ColorArg,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// Seed for the computer's tie-break, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file overriding the scoring weights
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Human against the computer
    Pve,
    /// Two humans on one board
    Pvp,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Stone {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Black => Stone::Black,
            ColorArg::White => Stone::White,
        }
    }
}

impl Cli {
    /// Game mode selected by `--mode` and `--human`
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeArg::Pve => GameMode::PvE {
                human_color: self.human.into(),
            },
            ModeArg::Pvp => GameMode::PvP,
        }
    }
}
