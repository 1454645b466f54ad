//! Turn transitions and game outcomes.

use super::Color;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Color),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(*color),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{} player wins", color),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// What happens after a move has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// The mover keeps the turn (bonus turn).
    Continue,
    /// The other player moves next.
    Switch,
    /// The session is over.
    GameOver(Outcome),
}

impl Transition {
    /// Returns true if the game ended.
    pub fn is_game_over(&self) -> bool {
        matches!(self, Transition::GameOver(_))
    }

    /// Returns the outcome, if the game ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Transition::GameOver(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Moves are accepted.
    InProgress,
    /// Terminal; no more moves.
    GameOver(Outcome),
}
