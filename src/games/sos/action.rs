//! First-class move types for SOS.
//!
//! A move carries its letter explicitly. The engine never infers the
//! letter from anywhere else, which keeps live play and replay identical.

use super::{Color, Coord, Letter};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing a letter at a coordinate.
///
/// This is also the unit of the move log (`color,letter,row,col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub color: Color,
    /// The letter being placed.
    pub letter: Letter,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(color: Color, letter: Letter, row: usize, col: usize) -> Self {
        Self {
            color,
            letter,
            row,
            col,
        }
    }

    /// Returns the target coordinate.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {} at ({}, {})", self.color, self.letter, self.row, self.col)
    }
}

/// Why a move was rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// Row or column outside the board.
    #[display("out of range")]
    OutOfRange,
    /// Cell already holds a letter.
    #[display("cell is occupied")]
    Occupied,
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is raised before the board is touched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is out of range or occupied. Retryable.
    #[display("Invalid move at ({}, {}): {}", row, col, reason)]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// What was wrong with it.
        reason: InvalidMoveReason,
    },

    /// The session has not started or is already over.
    #[display("Game is not in progress")]
    GameNotInProgress,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Color),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true if the caller may simply try another move.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::InvalidMove { .. } | MoveError::WrongPlayer(_))
    }
}

impl std::error::Error for MoveError {}
