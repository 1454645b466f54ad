//! Square N×N board storage.

use super::action::{InvalidMoveReason, MoveError};
use super::{Cell, Coord, Letter};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 10;

/// Requested board size is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size {} is outside {}..={}", size, MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
pub struct BoardSizeError {
    /// The rejected size.
    pub size: usize,
}

/// N×N SOS board. The size never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] unless `size` is within 3..=10.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardSizeError { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Returns the edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Returns the letter at a coordinate, `None` when empty or off the board.
    pub fn letter_at(&self, coord: Coord) -> Option<Letter> {
        self.get(coord.row, coord.col).and_then(Cell::letter)
    }

    /// Checks if a cell is on the board and unmarked.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Checks that a cell can receive a letter without touching the board.
    pub fn check_placeable(&self, row: usize, col: usize) -> Result<(), MoveError> {
        match self.get(row, col) {
            None => Err(MoveError::InvalidMove {
                row,
                col,
                reason: InvalidMoveReason::OutOfRange,
            }),
            Some(Cell::Marked(_)) => Err(MoveError::InvalidMove {
                row,
                col,
                reason: InvalidMoveReason::Occupied,
            }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Places a letter.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the cell is out of range or
    /// already occupied. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, letter: Letter) -> Result<(), MoveError> {
        self.check_placeable(row, col)?;
        self.cells[row * self.size + col] = Cell::Marked(letter);
        Ok(())
    }

    /// Checks if every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as rows of `S`, `O` and `.`.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.size * (self.size * 2 + 1));
        for (row, chunk) in self.cells.chunks(self.size).enumerate() {
            let line = chunk
                .iter()
                .map(|c| match c {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(letter) => letter.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            result.push_str(&line);
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
