//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the computer or another player.

use clap::Parser;
use gomoku::cli::Cli;
use gomoku::ui::{AppSettings, GomokuApp};
use gomoku::ScoringConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .init();

    let weights = match &cli.weights {
        Some(path) => ScoringConfig::from_toml_file(path).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default weights");
            ScoringConfig::default()
        }),
        None => ScoringConfig::default(),
    };

    let settings = AppSettings {
        mode: cli.game_mode(),
        ai_delay_ms: cli.ai_delay_ms,
        seed: cli.seed,
        weights,
    };
    info!(mode = ?settings.mode, delay_ms = settings.ai_delay_ms, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, settings)))),
    )
}
