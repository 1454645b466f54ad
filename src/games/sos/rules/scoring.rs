//! SOS detection.

use super::super::window::{Direction, Window, scan_windows, windows_through};
use super::super::{Board, Coord, Letter};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The literal sequence that scores.
const SOS: [Letter; 3] = [Letter::S, Letter::O, Letter::S];

/// Returns true if the window reads S, O, S in order.
pub fn is_sos(board: &Board, window: &Window) -> bool {
    window
        .cells()
        .iter()
        .zip(SOS)
        .all(|(coord, expected)| board.letter_at(*coord) == Some(expected))
}

/// SOS windows among the line families crossing `coord`.
///
/// Families are examined row, column, primary diagonal, secondary diagonal.
/// Already-credited windows are included; filtering them is the engine's job.
#[instrument(skip(board))]
pub fn completed_windows(board: &Board, coord: Coord) -> Vec<Window> {
    Direction::iter()
        .flat_map(|direction| windows_through(coord, direction, board.size()))
        .filter(|window| is_sos(board, window))
        .collect()
}

/// Total number of windows on the board that currently read SOS.
pub fn count_sos(board: &Board) -> usize {
    Direction::iter()
        .flat_map(|direction| scan_windows(board.size(), direction))
        .filter(|window| is_sos(board, window))
        .count()
}
