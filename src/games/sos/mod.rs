//! SOS: place S or O, complete S-O-S lines to score.

mod action;
mod board;
mod game;
mod invariants;
mod phases;
pub mod rules;
mod strategist;
mod types;
pub mod window;

pub use action::{InvalidMoveReason, Move, MoveError};
pub use board::{BoardSizeError, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Board};
pub use game::{Game, MoveReport, ScoreEvent};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, ScoreLedgerInvariant, SosInvariants,
};
pub use phases::{Lifecycle, Outcome, Transition};
pub use rules::Scores;
pub use strategist::{StrategyError, Strategist, Suggestion, Tactic, find_completion};
pub use types::{Cell, Color, Coord, Letter, Mode, Player, PlayerKind};
pub use window::{Direction, Window};
