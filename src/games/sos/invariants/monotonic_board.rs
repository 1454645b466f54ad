//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Each move must have landed on an empty cell, so no letter was overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().size()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed.place(mov.row, mov.col, mov.letter).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
