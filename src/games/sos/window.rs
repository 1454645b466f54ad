//! Three-cell line spans and the order they are enumerated in.

use super::Coord;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Length of an SOS.
pub const WINDOW_LEN: usize = 3;

/// Line family a window runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    PrimaryDiagonal,
    /// Top-right to bottom-left (↙).
    SecondaryDiagonal,
}

impl Direction {
    /// Row and column delta of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::PrimaryDiagonal => (1, 1),
            Direction::SecondaryDiagonal => (1, -1),
        }
    }

    /// Moves `steps` cells from `from`, returning `None` if that leaves a
    /// board of edge `size`.
    pub fn offset(self, from: Coord, steps: isize, size: usize) -> Option<Coord> {
        let (dr, dc) = self.delta();
        let row = from.row as isize + dr * steps;
        let col = from.col as isize + dc * steps;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

/// A 3-cell span, identified by its start and end cell in scan direction.
///
/// Two windows are the same window iff their coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Window {
    /// First cell in scan direction.
    pub start: Coord,
    /// Last cell in scan direction.
    pub end: Coord,
}

impl Window {
    /// Builds the window starting at `start`, if it fits on the board.
    pub fn from_start(start: Coord, direction: Direction, size: usize) -> Option<Self> {
        let end = direction.offset(start, (WINDOW_LEN - 1) as isize, size)?;
        // bounds of `start` itself
        direction.offset(start, 0, size)?;
        Some(Self { start, end })
    }

    /// The middle cell.
    pub fn middle(&self) -> Coord {
        Coord::new(
            (self.start.row + self.end.row) / 2,
            (self.start.col + self.end.col) / 2,
        )
    }

    /// All three cells, start first.
    pub fn cells(&self) -> [Coord; WINDOW_LEN] {
        [self.start, self.middle(), self.end]
    }

    /// Returns true if `coord` is one of the window's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Every window of `direction` on a board of edge `size`, in scan order.
///
/// - Horizontal: rows top to bottom, then start column left to right.
/// - Vertical: columns left to right, then start row top to bottom.
/// - Diagonals: start row ascending, then start column ascending. A
///   secondary-diagonal window starts at its top-right cell, so its start
///   column ranges from 2 upward.
pub fn scan_windows(size: usize, direction: Direction) -> Vec<Window> {
    let mut windows = Vec::new();
    match direction {
        Direction::Vertical => {
            for col in 0..size {
                for row in 0..size {
                    windows.extend(Window::from_start(Coord::new(row, col), direction, size));
                }
            }
        }
        _ => {
            for row in 0..size {
                for col in 0..size {
                    windows.extend(Window::from_start(Coord::new(row, col), direction, size));
                }
            }
        }
    }
    windows
}

/// Windows of `direction` to examine after a letter lands on `coord`.
///
/// Rows and columns are examined in full. Diagonals are examined for the
/// windows passing through `coord`, in ascending start order.
pub fn windows_through(coord: Coord, direction: Direction, size: usize) -> Vec<Window> {
    match direction {
        Direction::Horizontal => (0..size)
            .filter_map(|col| Window::from_start(Coord::new(coord.row, col), direction, size))
            .collect(),
        Direction::Vertical => (0..size)
            .filter_map(|row| Window::from_start(Coord::new(row, coord.col), direction, size))
            .collect(),
        Direction::PrimaryDiagonal | Direction::SecondaryDiagonal => (0..WINDOW_LEN as isize)
            .rev()
            .filter_map(|back| direction.offset(coord, -back, size))
            .filter_map(|start| Window::from_start(start, direction, size))
            .collect(),
    }
}
