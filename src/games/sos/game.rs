//! SOS game engine.
//!
//! One `Game` is one session: board, both players, the set of credited
//! windows and the mode policy. Every move, live or replayed, goes
//! through [`Game::apply_move`].

use super::action::{Move, MoveError};
use super::board::{Board, BoardSizeError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SosInvariants};
use super::phases::{Lifecycle, Outcome, Transition};
use super::rules::{Scores, apply_mode_transition, completed_windows};
use super::window::Window;
use super::{Color, Letter, Mode, Player, PlayerKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// A window credited to a player. Presentation code draws a line for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEvent {
    /// The SOS span.
    pub window: Window,
    /// Who was credited.
    pub color: Color,
}

/// Everything that happened as a result of one move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move as applied.
    pub mov: Move,
    /// Windows newly credited by this move, in detection order.
    pub scored: Vec<ScoreEvent>,
    /// What the mode policy decided.
    pub transition: Transition,
}

impl MoveReport {
    /// Returns true if the move credited at least one window.
    pub fn did_score(&self) -> bool {
        !self.scored.is_empty()
    }
}

/// SOS game engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) board: Board,
    mode: Mode,
    pub(super) blue: Player,
    pub(super) red: Player,
    to_move: Color,
    lifecycle: Lifecycle,
    pub(super) scored: HashSet<Window>,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a new game. Blue moves first and both scores start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is outside 3..=10.
    #[instrument]
    pub fn new(
        size: usize,
        mode: Mode,
        blue: PlayerKind,
        red: PlayerKind,
    ) -> Result<Self, BoardSizeError> {
        let board = Board::new(size)?;
        info!(size, %mode, %blue, %red, "Starting new SOS game");
        Ok(Self {
            board,
            mode,
            blue: Player::new(Color::Blue, blue),
            red: Player::new(Color::Red, red),
            to_move: Color::Blue,
            lifecycle: Lifecycle::InProgress,
            scored: HashSet::new(),
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the color to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns the player of the given color.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Blue => &mut self.blue,
            Color::Red => &mut self.red,
        }
    }

    /// Returns both scores.
    pub fn scores(&self) -> Scores {
        Scores {
            blue: self.blue.score(),
            red: self.red.score(),
        }
    }

    /// Returns the lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.lifecycle == Lifecycle::InProgress
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.lifecycle {
            Lifecycle::InProgress => None,
            Lifecycle::GameOver(outcome) => Some(outcome),
        }
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Returns the moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true if the window has already been credited.
    pub fn is_scored(&self, window: &Window) -> bool {
        self.scored.contains(window)
    }

    /// Number of windows credited so far.
    pub fn scored_count(&self) -> usize {
        self.scored.len()
    }

    /// Places a letter for the player to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize, letter: Letter) -> Result<MoveReport, MoveError> {
        self.apply_move(Move::new(self.to_move, letter, row, col))
    }

    /// Validates and applies a move, credits new SOS windows and runs the
    /// mode policy.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotInProgress`] once the game is over
    /// - [`MoveError::WrongPlayer`] if `mov.color` is not the player to move
    /// - [`MoveError::InvalidMove`] if the cell is out of range or occupied
    /// - [`MoveError::InvariantViolation`] (debug builds) if a postcondition
    ///   fails; the move is rolled back
    ///
    /// No state changes on error.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply_move(&mut self, mov: Move) -> Result<MoveReport, MoveError> {
        if !self.is_in_progress() {
            warn!("Move submitted after game over");
            return Err(MoveError::GameNotInProgress);
        }
        if mov.color != self.to_move {
            warn!(expected = %self.to_move, "Move out of turn");
            return Err(MoveError::WrongPlayer(mov.color));
        }
        #[cfg(debug_assertions)]
        let snapshot = self.clone();

        self.board.place(mov.row, mov.col, mov.letter).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        self.history.push(mov);

        let scored = self.credit_new_windows(mov);
        let transition = apply_mode_transition(
            self.mode,
            !scored.is_empty(),
            self.board.is_full(),
            mov.color,
            self.scores(),
        );

        match transition {
            Transition::Continue => {
                debug!(color = %mov.color, "Bonus turn");
            }
            Transition::Switch => {
                self.to_move = self.to_move.opponent();
            }
            Transition::GameOver(outcome) => {
                info!(%outcome, scores = ?self.scores(), "Game over");
                self.lifecycle = Lifecycle::GameOver(outcome);
            }
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = SosInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed, rolling back move");
            *self = snapshot;
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )));
        }

        Ok(MoveReport {
            mov,
            scored,
            transition,
        })
    }

    /// Credits every SOS through the placed cell that has not been credited
    /// before. There is no per-move cap.
    fn credit_new_windows(&mut self, mov: Move) -> Vec<ScoreEvent> {
        let mut events = Vec::new();
        for window in completed_windows(&self.board, mov.coord()) {
            if !self.scored.insert(window) {
                continue;
            }
            self.player_mut(mov.color).credit(1);
            info!(color = %mov.color, %window, "SOS scored");
            events.push(ScoreEvent {
                window,
                color: mov.color,
            });
        }
        events
    }
}
