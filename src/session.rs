//! Live game session: engine, computer player and move log together.
//!
//! The session is what a front end talks to. It applies human moves,
//! lets computer players take their turns in an explicit loop, and
//! records every applied move. Log failures are logged and otherwise
//! ignored; the game in memory is authoritative.

use crate::config::{ConfigError, ValidConfig};
use crate::games::sos::{
    Color, Game, Letter, Move, MoveError, MoveReport, Player, StrategyError, Strategist,
    Suggestion,
};
use crate::recorder::{GameRecorder, RecorderError, SessionHeader};
use crate::replay::{ReplayDriver, ReplayError};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Errors surfaced by a session.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// Settings were rejected; no session exists.
    #[display("{}", _0)]
    Config(ConfigError),

    /// The engine rejected a move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The computer player had nothing to play.
    #[display("{}", _0)]
    Strategy(StrategyError),

    /// A human move was submitted while a computer player is to move.
    #[display("{} is computer-controlled", _0)]
    #[from(ignore)]
    ComputerToMove(#[error(not(source))] Color),
}

/// A human move plus the computer moves it triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The submitted move.
    pub human: MoveReport,
    /// Computer moves played before control returned, in order.
    pub computer: Vec<MoveReport>,
}

/// A running SOS session.
#[derive(Debug)]
pub struct Session {
    game: Game,
    recorder: GameRecorder,
    strategist: Strategist,
}

impl Session {
    /// Starts a session, logging to the configured path or to memory.
    #[instrument(skip(config))]
    pub fn start(config: &ValidConfig) -> Result<Self, SessionError> {
        let recorder = match config.log_path() {
            Some(path) => GameRecorder::to_file(path.clone()),
            None => GameRecorder::in_memory(),
        };
        let strategist = match config.seed() {
            Some(seed) => Strategist::seeded(*seed),
            None => Strategist::new(),
        };
        Self::with_parts(config, recorder, strategist)
    }

    /// Starts a session over an injected recorder and strategist.
    ///
    /// Truncates the recorder's log and writes fresh metadata. Computer
    /// players do not move until [`Session::advance`] is called.
    #[instrument(skip_all, fields(size = config.board_size(), mode = %config.mode()))]
    pub fn with_parts(
        config: &ValidConfig,
        mut recorder: GameRecorder,
        strategist: Strategist,
    ) -> Result<Self, SessionError> {
        let game = new_game(config)?;
        if let Err(e) = recorder.begin_session(header_of(config)) {
            warn!(error = %e, "Failed to start move log; playing without it");
        }
        Ok(Self {
            game,
            recorder,
            strategist,
        })
    }

    /// Abandons the current game and starts a fresh one on the same log.
    #[instrument(skip_all)]
    pub fn restart(&mut self, config: &ValidConfig) -> Result<(), SessionError> {
        let game = new_game(config)?;
        if let Err(e) = self.recorder.begin_session(header_of(config)) {
            warn!(error = %e, "Failed to restart move log; playing without it");
        }
        self.game = game;
        info!("Session restarted");
        Ok(())
    }

    /// Returns the engine state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.game.current_player()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.game.is_full()
    }

    /// Returns the recorder.
    pub fn recorder(&self) -> &GameRecorder {
        &self.recorder
    }

    /// Returns the stored log lines.
    pub fn load_session(&self) -> Result<Vec<String>, RecorderError> {
        self.recorder.load_session()
    }

    /// Prepares a replay of this session's log.
    pub fn replay(&self) -> Result<ReplayDriver, ReplayError> {
        ReplayDriver::load(&self.recorder)
    }

    /// Applies a move for the current player, then lets computer players
    /// move until a human is to move or the game ends.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the game untouched and the turn unchanged.
    #[instrument(skip(self))]
    pub fn submit(&mut self, row: usize, col: usize, letter: Letter) -> Result<TurnReport, SessionError> {
        let current = self.game.current_player();
        if self.game.is_in_progress() && current.is_computer() {
            return Err(SessionError::ComputerToMove(current.color()));
        }
        let human = self.apply_move(Move::new(self.game.to_move(), letter, row, col))?;
        let computer = self.advance()?;
        Ok(TurnReport { human, computer })
    }

    /// Asks the strategist for the current player's move without applying it.
    ///
    /// # Errors
    ///
    /// [`StrategyError::NoMoveAvailable`] on a full board,
    /// [`MoveError::GameNotInProgress`] once the game is over.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Result<Suggestion, SessionError> {
        if !self.game.is_in_progress() {
            if self.game.is_full() {
                return Err(StrategyError::NoMoveAvailable.into());
            }
            return Err(MoveError::GameNotInProgress.into());
        }
        Ok(self.strategist.choose_move(self.game.board())?)
    }

    /// Plays computer turns while a computer player is to move and the game
    /// is in progress. Bonus turns repeat the loop for the same player.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<Vec<MoveReport>, SessionError> {
        let mut reports = Vec::new();
        while self.game.is_in_progress() && self.game.current_player().is_computer() {
            let suggestion = self.strategist.choose_move(self.game.board())?;
            debug!(?suggestion, "Computer move");
            let mov = Move::new(
                self.game.to_move(),
                suggestion.letter,
                suggestion.row,
                suggestion.col,
            );
            reports.push(self.apply_move(mov)?);
        }
        Ok(reports)
    }

    fn apply_move(&mut self, mov: Move) -> Result<MoveReport, SessionError> {
        let report = self.game.apply_move(mov)?;
        if let Err(e) = self.recorder.record_move(&report.mov) {
            warn!(error = %e, "Failed to record move; replay of this session will be incomplete");
        }
        Ok(report)
    }
}

fn new_game(config: &ValidConfig) -> Result<Game, SessionError> {
    Game::new(*config.board_size(), *config.mode(), *config.blue(), *config.red())
        .map_err(|e| SessionError::Config(ConfigError::new(e.to_string())))
}

fn header_of(config: &ValidConfig) -> SessionHeader {
    SessionHeader {
        size: *config.board_size(),
        mode: *config.mode(),
        blue: *config.blue(),
        red: *config.red(),
    }
}
