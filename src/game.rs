//! Game session: turn order, move validation and win detection
//!
//! A [`GameSession`] owns the board and is the only thing the front-end
//! mutates. It is either in progress or won; a won session rejects every
//! move until it is reset. Draws are not a state: when the board fills up
//! the computer reports [`GameError::NoLegalMove`] and the caller decides.

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::find_winning_cells;

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    /// Set when this move won the game
    pub winner: Option<Stone>,
    /// Cells of the winning line(s), empty unless `winner` is set
    pub winning_cells: Vec<Pos>,
}

/// One game of Gomoku.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Stone,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: usize,
    winning_cells: Vec<Pos>,
}

impl GameSession {
    /// Fresh game on an empty board, Black to move
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Stone::Black,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
            winning_cells: Vec::new(),
        }
    }

    /// Fresh game for a requested board size; only 15 is supported.
    pub fn with_board_size(size: usize) -> Result<Self, GameError> {
        if size != BOARD_SIZE {
            return Err(GameError::UnsupportedBoardSize(size));
        }
        Ok(Self::new())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(stone) => Some(stone),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cells that won the game, empty while in progress
    pub fn winning_cells(&self) -> &[Pos] {
        &self.winning_cells
    }

    /// Play `player`'s stone at `(row, col)`.
    ///
    /// Checks, in order: the game is not over, `player` is to move, the
    /// cell exists and is empty. Any failure leaves the session unchanged.
    /// On success the move either wins or passes the turn.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, row: i32, col: i32, player: Stone) -> Result<MoveOutcome, GameError> {
        if let GameStatus::Won(winner) = self.status {
            warn!("move rejected, game already over");
            return Err(GameError::GameAlreadyOver { winner });
        }
        if player != self.to_move {
            warn!("move rejected, out of turn");
            return Err(GameError::OutOfTurn {
                expected: self.to_move,
                got: player,
            });
        }

        let pos = self.board.place(row, col, player).inspect_err(|e| {
            warn!(error = %e, "move rejected");
        })?;
        self.last_move = Some(pos);
        self.move_count += 1;

        if let Some(cells) = find_winning_cells(&self.board, pos, player) {
            info!(winner = %player, cells = cells.len(), "game won");
            self.status = GameStatus::Won(player);
            self.winning_cells = cells.clone();
            return Ok(MoveOutcome {
                accepted: true,
                winner: Some(player),
                winning_cells: cells,
            });
        }

        self.to_move = player.opponent();
        debug!(%pos, next = %self.to_move, "move accepted");
        Ok(MoveOutcome {
            accepted: true,
            winner: None,
            winning_cells: Vec::new(),
        })
    }

    /// Ask `engine` for the side to move's best cell, without playing it.
    ///
    /// Fails with `GameAlreadyOver` on a won game and `NoLegalMove` on a
    /// full board.
    pub fn compute_ai_move(&self, engine: &mut AIEngine) -> Result<Pos, GameError> {
        self.compute_ai_move_with_stats(engine).map(|r| r.best_move)
    }

    /// [`GameSession::compute_ai_move`] with the engine's statistics
    pub fn compute_ai_move_with_stats(&self, engine: &mut AIEngine) -> Result<MoveResult, GameError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(GameError::GameAlreadyOver { winner });
        }
        engine.get_move_with_stats(&self.board, self.to_move)
    }

    /// Compute the side to move's best cell and play it.
    pub fn play_ai_move(&mut self, engine: &mut AIEngine) -> Result<(Pos, MoveOutcome), GameError> {
        let pos = self.compute_ai_move(engine)?;
        let outcome = self.apply_move(i32::from(pos.row), i32::from(pos.col), self.to_move)?;
        Ok((pos, outcome))
    }

    /// Back to an empty board with Black to move
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a game on a `board_size` board
pub fn new_game(board_size: usize) -> Result<GameSession, GameError> {
    GameSession::with_board_size(board_size)
}

/// Play a move on `session`; see [`GameSession::apply_move`]
pub fn apply_move(
    session: &mut GameSession,
    row: i32,
    col: i32,
    player: Stone,
) -> Result<MoveOutcome, GameError> {
    session.apply_move(row, col, player)
}

/// The computer's choice for the side to move; see [`GameSession::compute_ai_move`]
pub fn compute_ai_move(session: &GameSession, engine: &mut AIEngine) -> Result<Pos, GameError> {
    session.compute_ai_move(engine)
}

/// Consume a session and hand back a fresh one
pub fn reset(mut session: GameSession) -> GameSession {
    session.reset();
    session
}
