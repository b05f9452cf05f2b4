//! Game state management for the Gomoku GUI

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{AIEngine, GameError, GameSession, MoveOutcome, MoveResult, Pos, ScoringConfig, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// Start-up settings for the GUI
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub mode: GameMode,
    /// Pause before the computer plays
    pub ai_delay_ms: u64,
    /// Tie-break seed, entropy when `None`
    pub seed: Option<u64>,
    pub weights: ScoringConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_delay_ms: 500,
            seed: None,
            weights: ScoringConfig::default(),
        }
    }
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Board filled up without a winner
    pub draw: bool,

    engine: AIEngine,
    ai_delay: Duration,
    /// When the pending computer move is due
    ai_due: Option<Instant>,
}

impl GameState {
    pub fn new(settings: AppSettings) -> Self {
        let engine = match settings.seed {
            Some(seed) => AIEngine::with_config_and_seed(settings.weights, seed),
            None => AIEngine::with_config(settings.weights),
        };
        Self {
            session: GameSession::new(),
            mode: settings.mode,
            last_ai_result: None,
            suggested_move: None,
            message: None,
            draw: false,
            engine,
            ai_delay: Duration::from_millis(settings.ai_delay_ms),
            ai_due: None,
        }
    }

    /// Start over, keeping the mode and the engine
    pub fn reset(&mut self) {
        self.session.reset();
        self.last_ai_result = None;
        self.suggested_move = None;
        self.message = None;
        self.draw = false;
        self.ai_due = None;
    }

    /// Switch mode; this starts a new game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Won or drawn
    pub fn is_finished(&self) -> bool {
        self.session.is_over() || self.draw
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.session.to_move() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// A computer move is scheduled and not yet played
    pub fn is_ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Time left before the pending computer move
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        self.ai_due.map(|due| due.saturating_duration_since(now))
    }

    /// Place the human's stone at `pos`.
    ///
    /// In PvE a click during the computer's turn is rejected as out of turn.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        let player = match self.mode {
            GameMode::PvE { human_color } => human_color,
            GameMode::PvP => self.session.to_move(),
        };
        let result = self
            .session
            .apply_move(i32::from(pos.row), i32::from(pos.col), player);
        match &result {
            Ok(outcome) => self.after_move(outcome),
            Err(e) => self.message = Some(e.to_string()),
        }
        result
    }

    /// Board click from the human; a rejection is kept in `message`
    pub fn handle_click(&mut self, pos: Pos) {
        if let Err(e) = self.try_place_stone(pos) {
            debug!(error = %e, %pos, "click rejected");
        }
    }

    /// Schedule the computer's move if it is due to play
    pub fn schedule_ai(&mut self, now: Instant) {
        if self.is_finished() || !self.is_ai_turn() || self.ai_due.is_some() {
            return;
        }
        self.ai_due = Some(now + self.ai_delay);
        debug!(delay_ms = self.ai_delay.as_millis() as u64, "computer move scheduled");
    }

    /// Play the pending computer move once its delay has passed.
    ///
    /// Returns true if a stone was placed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.ai_due {
            Some(due) if now >= due => {}
            _ => return false,
        }
        self.ai_due = None;
        if self.is_finished() || !self.is_ai_turn() {
            return false;
        }

        let result = match self.session.compute_ai_move_with_stats(&mut self.engine) {
            Ok(result) => result,
            Err(GameError::NoLegalMove) => {
                self.declare_draw();
                return false;
            }
            Err(e) => {
                warn!(error = %e, "computer could not move");
                self.message = Some(e.to_string());
                return false;
            }
        };

        let pos = result.best_move;
        let color = self.session.to_move();
        self.last_ai_result = Some(result);
        match self
            .session
            .apply_move(i32::from(pos.row), i32::from(pos.col), color)
        {
            Ok(outcome) => {
                self.after_move(&outcome);
                true
            }
            Err(e) => {
                warn!(error = %e, %pos, "computer move rejected");
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Request move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.is_finished() || self.is_ai_pending() {
            return;
        }
        match self.session.compute_ai_move_with_stats(&mut self.engine) {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(GameError::NoLegalMove) => self.declare_draw(),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn after_move(&mut self, outcome: &MoveOutcome) {
        self.suggested_move = None;
        self.message = None;
        if outcome.winner.is_none() && self.session.board().is_full() {
            self.declare_draw();
        }
    }

    fn declare_draw(&mut self) {
        if !self.draw {
            info!(moves = self.session.move_count(), "game drawn, board full");
        }
        self.draw = true;
        self.ai_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: GameMode) -> GameState {
        GameState::new(AppSettings {
            mode,
            ai_delay_ms: 0,
            seed: Some(3),
            weights: ScoringConfig::default(),
        })
    }

    #[test]
    fn test_computer_opens_in_center() {
        let mut gs = state(GameMode::PvE {
            human_color: Stone::White,
        });
        let now = Instant::now();
        assert!(gs.is_ai_turn());
        gs.schedule_ai(now);
        assert!(gs.is_ai_pending());
        assert!(gs.tick(now));
        assert_eq!(gs.session.last_move(), Some(Pos::center()));
        assert!(gs.is_human_turn());
    }

    #[test]
    fn test_delay_is_respected() {
        let mut gs = GameState::new(AppSettings {
            mode: GameMode::PvE {
                human_color: Stone::White,
            },
            ai_delay_ms: 500,
            seed: Some(1),
            weights: ScoringConfig::default(),
        });
        let now = Instant::now();
        gs.schedule_ai(now);
        assert!(!gs.tick(now));
        assert_eq!(gs.ai_remaining(now), Some(Duration::from_millis(500)));
        assert!(gs.tick(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_human_rejected_on_computer_turn() {
        let mut gs = state(GameMode::default());
        gs.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(gs.is_ai_turn());
        let err = gs.try_place_stone(Pos::new(0, 0)).unwrap_err();
        assert!(matches!(err, GameError::OutOfTurn { .. }));
        assert!(gs.message.is_some());
        assert!(gs.session.board().is_empty_at(Pos::new(0, 0)));
    }

    #[test]
    fn test_click_on_occupied_cell_sets_message() {
        let mut gs = state(GameMode::PvP);
        gs.handle_click(Pos::new(7, 7));
        assert_eq!(gs.message, None);
        assert_eq!(gs.session.to_move(), Stone::White);

        gs.handle_click(Pos::new(7, 7));
        assert_eq!(
            gs.message,
            Some(GameError::CellOccupied { row: 7, col: 7 }.to_string())
        );
        assert_eq!(gs.session.move_count(), 1);
        assert_eq!(gs.session.to_move(), Stone::White);
    }

    #[test]
    fn test_pvp_alternates_and_suggests() {
        let mut gs = state(GameMode::PvP);
        gs.try_place_stone(Pos::new(7, 7)).unwrap();
        gs.try_place_stone(Pos::new(7, 8)).unwrap();
        assert_eq!(gs.session.to_move(), Stone::Black);

        gs.request_suggestion();
        let hint = gs.suggested_move.unwrap();
        assert!(gs.session.board().is_empty_at(hint));

        gs.try_place_stone(hint).unwrap();
        assert_eq!(gs.suggested_move, None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut gs = state(GameMode::PvP);
        gs.try_place_stone(Pos::new(7, 7)).unwrap();
        gs.request_suggestion();
        gs.reset();
        assert_eq!(gs.session, GameSession::new());
        assert_eq!(gs.suggested_move, None);
        assert!(!gs.draw);
        assert_eq!(gs.mode, GameMode::PvP);
    }
}
