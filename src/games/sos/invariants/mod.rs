//! First-class invariants for SOS.
//!
//! Invariants are logical properties that must hold after every move.
//! The engine checks them in debug builds; each is also testable on its own.

mod history_consistent;
mod monotonic_board;
mod score_ledger;

pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use score_ledger::ScoreLedgerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants, checked after every move in debug builds.
pub type SosInvariants = (
    MonotonicBoardInvariant,
    HistoryConsistentInvariant,
    ScoreLedgerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sos::{Game, Letter, Mode, PlayerKind};

    #[test]
    fn test_fresh_game_satisfies_all() {
        let game = Game::new(5, Mode::General, PlayerKind::Human, PlayerKind::Human).unwrap();
        assert!(SosInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        let mut game = Game::new(3, Mode::General, PlayerKind::Human, PlayerKind::Human).unwrap();
        game.play(0, 0, Letter::S).unwrap();
        // a letter that no move put there
        game.board.place(2, 2, Letter::O).unwrap();
        let violations = SosInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
