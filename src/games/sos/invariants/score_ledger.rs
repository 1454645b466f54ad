//! Score ledger invariant: points, credited windows and SOS on the board agree.

use super::super::Game;
use super::super::rules::count_sos;
use super::Invariant;

/// Invariant: total score == credited windows == SOS windows on the board.
///
/// Every SOS is credited exactly once, to whoever completed it.
pub struct ScoreLedgerInvariant;

impl Invariant<Game> for ScoreLedgerInvariant {
    fn holds(game: &Game) -> bool {
        let scores = game.scores();
        let total = (scores.blue + scores.red) as usize;
        total == game.scored_count() && game.scored_count() == count_sos(game.board())
    }

    fn description() -> &'static str {
        "Scores equal the number of distinct SOS windows"
    }
}
