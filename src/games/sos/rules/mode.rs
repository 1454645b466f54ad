//! End-of-turn policy per game mode.

use super::super::phases::{Outcome, Transition};
use super::super::{Color, Mode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Both players' scores at the moment a move resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Blue's score.
    pub blue: u32,
    /// Red's score.
    pub red: u32,
}

impl Scores {
    /// Score of one color.
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Blue => self.blue,
            Color::Red => self.red,
        }
    }

    /// Strictly higher score wins, otherwise a draw.
    pub fn leader(&self) -> Outcome {
        match self.blue.cmp(&self.red) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Blue),
            std::cmp::Ordering::Less => Outcome::Winner(Color::Red),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Decides what follows a resolved move.
///
/// | mode    | scored | full | result                  |
/// |---------|--------|------|-------------------------|
/// | Simple  | yes    | any  | mover wins              |
/// | Simple  | no     | no   | switch                  |
/// | Simple  | no     | yes  | draw                    |
/// | General | any    | yes  | higher score, else draw |
/// | General | no     | no   | switch                  |
/// | General | yes    | no   | mover keeps the turn    |
#[instrument]
pub fn apply_mode_transition(
    mode: Mode,
    scored: bool,
    board_full: bool,
    mover: Color,
    scores: Scores,
) -> Transition {
    match (mode, scored, board_full) {
        (Mode::Simple, true, _) => Transition::GameOver(Outcome::Winner(mover)),
        (Mode::Simple, false, false) => Transition::Switch,
        (Mode::Simple, false, true) => Transition::GameOver(Outcome::Draw),
        (Mode::General, _, true) => Transition::GameOver(scores.leader()),
        (Mode::General, false, false) => Transition::Switch,
        (Mode::General, true, false) => Transition::Continue,
    }
}
