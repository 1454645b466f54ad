//! Greedy computer player.
//!
//! The strategist looks for a window that one more letter turns into an
//! SOS, trying line families in a fixed priority order. If none exists it
//! plays a random letter on a random empty cell. There is no lookahead.

use super::window::{Direction, Window, scan_windows};
use super::{Board, Cell, Coord, Letter};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The strategist was asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    /// No empty cell remains.
    #[display("No move available: board is full")]
    NoMoveAvailable,
}

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tactic {
    /// Completes a window along a line family.
    Complete(Direction),
    /// No completion existed.
    Random,
}

/// A placement chosen by the strategist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
    /// Letter to place.
    pub letter: Letter,
    /// Rule that produced it.
    pub tactic: Tactic,
}

/// Computer move selection over a read-only board.
#[derive(Debug, Clone)]
pub struct Strategist<R = StdRng> {
    rng: R,
}

impl Strategist<StdRng> {
    /// Creates a strategist seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategist whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Strategist<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Strategist<R> {
    /// Wraps an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the next placement.
    ///
    /// Completions are tried horizontal, vertical, primary diagonal,
    /// secondary diagonal; the first match wins. Otherwise an empty cell
    /// and a letter are drawn uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoMoveAvailable`] if the board is full.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Suggestion, StrategyError> {
        if let Some(suggestion) = Direction::iter().find_map(|d| find_completion(board, d)) {
            debug!(?suggestion, "Found completion");
            return Ok(suggestion);
        }

        let empty: Vec<Coord> = board.empty_cells().collect();
        let coord = empty
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoMoveAvailable)?;
        let letter = if self.rng.random_bool(0.5) {
            Letter::S
        } else {
            Letter::O
        };
        debug!(%coord, %letter, "No completion, playing randomly");
        Ok(Suggestion {
            row: coord.row,
            col: coord.col,
            letter,
            tactic: Tactic::Random,
        })
    }
}

/// First window along `direction`, in scan order, that one letter completes.
///
/// Recognized patterns (`_` is empty):
/// - `_ O S` → S on the first cell
/// - `S _ S` → O on the middle cell
/// - `S O _` → S on the last cell
pub fn find_completion(board: &Board, direction: Direction) -> Option<Suggestion> {
    scan_windows(board.size(), direction)
        .into_iter()
        .find_map(|window| completion_in(board, &window))
        .map(|(coord, letter)| Suggestion {
            row: coord.row,
            col: coord.col,
            letter,
            tactic: Tactic::Complete(direction),
        })
}

fn completion_in(board: &Board, window: &Window) -> Option<(Coord, Letter)> {
    let [a, b, c] = window.cells();
    let cell = |coord: Coord| board.get(coord.row, coord.col).unwrap_or(Cell::Empty);
    use Cell::{Empty, Marked};
    use Letter::{O, S};
    match (cell(a), cell(b), cell(c)) {
        (Empty, Marked(O), Marked(S)) => Some((a, S)),
        (Marked(S), Empty, Marked(S)) => Some((b, O)),
        (Marked(S), Marked(O), Empty) => Some((c, S)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'S' => board.place(row, col, Letter::S).unwrap(),
                    'O' => board.place(row, col, Letter::O).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    fn placement(s: Suggestion) -> (usize, usize, Letter) {
        (s.row, s.col, s.letter)
    }

    #[test]
    fn test_each_pattern() {
        let first = board_from(&[".OS", "...", "..."]);
        let middle = board_from(&["S.S", "...", "..."]);
        let last = board_from(&["SO.", "...", "..."]);
        let h = Direction::Horizontal;
        assert_eq!(find_completion(&first, h).map(placement), Some((0, 0, Letter::S)));
        assert_eq!(find_completion(&middle, h).map(placement), Some((0, 1, Letter::O)));
        assert_eq!(find_completion(&last, h).map(placement), Some((0, 2, Letter::S)));
    }

    #[test]
    fn test_horizontal_beats_vertical() {
        // column 0 offers S at (2,0); row 2 offers S at (2,1)
        let board = board_from(&["S...", "O...", "..OS", "...."]);
        let mut strategist = Strategist::seeded(7);
        let choice = strategist.choose_move(&board).unwrap();
        assert_eq!(choice.tactic, Tactic::Complete(Direction::Horizontal));
        assert_eq!(placement(choice), (2, 1, Letter::S));
    }

    #[test]
    fn test_vertical_scan_order() {
        let board = board_from(&["..S", "..O", "S.."]);
        let found = find_completion(&board, Direction::Vertical).unwrap();
        assert_eq!(placement(found), (2, 2, Letter::S));
        assert!(find_completion(&board, Direction::Horizontal).is_none());
    }

    #[test]
    fn test_secondary_diagonal() {
        let board = board_from(&["..S", ".O.", "..."]);
        let mut strategist = Strategist::seeded(1);
        let choice = strategist.choose_move(&board).unwrap();
        assert_eq!(choice.tactic, Tactic::Complete(Direction::SecondaryDiagonal));
        assert_eq!(placement(choice), (2, 0, Letter::S));
    }

    #[test]
    fn test_row_beats_diagonals() {
        let board = board_from(&["S.S", ".O.", "..."]);
        let found = Strategist::seeded(3).choose_move(&board).unwrap();
        assert_eq!(found.tactic, Tactic::Complete(Direction::Horizontal));
        assert_eq!(placement(found), (0, 1, Letter::O));
    }

    #[test]
    fn test_primary_before_secondary() {
        // ↘ from (0,0) wants S at (2,2); ↙ from (0,3) wants S at (2,1)
        let board = board_from(&["S..S", ".OO.", "....", "...."]);
        assert!(find_completion(&board, Direction::Horizontal).is_none());
        assert!(find_completion(&board, Direction::Vertical).is_none());
        assert_eq!(
            find_completion(&board, Direction::SecondaryDiagonal).map(placement),
            Some((2, 1, Letter::S))
        );
        let found = Strategist::seeded(3).choose_move(&board).unwrap();
        assert_eq!(found.tactic, Tactic::Complete(Direction::PrimaryDiagonal));
        assert_eq!(placement(found), (2, 2, Letter::S));
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board = board_from(&["OOO", "O.O", "OO."]);
        for seed in 0..20 {
            let choice = Strategist::seeded(seed).choose_move(&board).unwrap();
            assert_eq!(choice.tactic, Tactic::Random);
            assert!(board.is_empty(choice.row, choice.col));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let board = Board::new(6).unwrap();
        let a = Strategist::seeded(42).choose_move(&board).unwrap();
        let b = Strategist::seeded(42).choose_move(&board).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from(&["OOO", "OOO", "OOO"]);
        assert_eq!(
            Strategist::seeded(0).choose_move(&board),
            Err(StrategyError::NoMoveAvailable)
        );
    }
}
