//! Core domain types for SOS.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A letter a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Letter {
    /// The outer letter of an SOS.
    S,
    /// The middle letter of an SOS.
    O,
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Square holds a letter.
    Marked(Letter),
}

impl Cell {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Marked(letter) => Some(letter),
        }
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        Cell::Marked(letter)
    }
}

/// Player identity.
///
/// Blue always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Color {
    /// First player.
    Blue,
    /// Second player.
    Red,
}

impl Color {
    /// Returns the other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

/// Who controls a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PlayerKind {
    /// Moves arrive from outside the engine.
    #[default]
    Human,
    /// Moves are chosen by the strategist.
    Computer,
}

/// Win condition for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Mode {
    /// The first scored SOS ends the game.
    Simple,
    /// Play until the board is full; highest score wins.
    General,
}

/// A board coordinate (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two seats in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    kind: PlayerKind,
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(color: Color, kind: PlayerKind) -> Self {
        Self {
            color,
            kind,
            score: 0,
        }
    }

    /// Returns the player's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns who controls this player.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns the player's score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true if the strategist plays this seat.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub(super) fn credit(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_log_spellings() {
        assert_eq!(Color::Blue.to_string(), "Blue");
        assert_eq!(PlayerKind::Computer.to_string(), "COMPUTER");
        assert_eq!(PlayerKind::from_str("HUMAN"), Ok(PlayerKind::Human));
        assert_eq!(Mode::from_str("General"), Ok(Mode::General));
        assert_eq!(Letter::from_str("O"), Ok(Letter::O));
        assert!(Letter::from_str("X").is_err());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Blue.opponent(), Color::Red);
        assert_eq!(Color::Red.opponent(), Color::Blue);
    }

    #[test]
    fn test_colors_in_seat_order() {
        use strum::IntoEnumIterator;
        assert_eq!(Color::iter().collect::<Vec<_>>(), vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_player_starts_at_zero() {
        let mut player = Player::new(Color::Red, PlayerKind::Computer);
        assert_eq!(player.score(), 0);
        assert!(player.is_computer());
        player.credit(2);
        assert_eq!(player.score(), 2);
    }
}
