//! History consistency invariant.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: one history entry per filled cell, each matching the board.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        if board.filled_count() != game.history().len() {
            return false;
        }
        game.history()
            .iter()
            .all(|mov| board.get(mov.row, mov.col) == Some(Cell::Marked(mov.letter)))
    }

    fn description() -> &'static str {
        "History matches filled cells"
    }
}
