//! Replay of a recorded session.
//!
//! A replay rebuilds the game from the log's metadata and feeds every
//! recorded move through [`Game::apply_move`], the same path live play
//! uses. Nothing is written back to the log.

use crate::games::sos::{
    BoardSizeError, Color, Game, Letter, Mode, Move, MoveError, MoveReport, Outcome, PlayerKind,
    Scores,
};
use crate::recorder::{BOARD_SIZE_KEY, GAME_MODE_KEY, GameRecorder, RecorderError, SessionHeader};
use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Index of the first move line.
const FIRST_MOVE_LINE: usize = 5;

/// Failure to reconstruct or replay a session.
#[derive(Debug, Clone, Display, Error)]
pub enum ReplayError {
    /// The log could not be read.
    #[display("{}", _0)]
    Log(RecorderError),

    /// A line does not parse.
    #[display("Malformed log line {}: {}", line_number, message)]
    Malformed {
        /// One-based line number.
        line_number: usize,
        /// What was wrong.
        message: String,
    },

    /// The recorded board size is unsupported.
    #[display("{}", _0)]
    BoardSize(BoardSizeError),

    /// The engine rejected a recorded move.
    #[display("Replayed move on line {} rejected: {}", line_number, source)]
    Move {
        /// One-based line number.
        line_number: usize,
        /// Engine error.
        source: MoveError,
    },
}

impl From<RecorderError> for ReplayError {
    fn from(err: RecorderError) -> Self {
        ReplayError::Log(err)
    }
}

fn malformed(index: usize, message: impl Into<String>) -> ReplayError {
    ReplayError::Malformed {
        line_number: index + 1,
        message: message.into(),
    }
}

/// Splits a `key,value` metadata line.
fn metadata<'a>(lines: &'a [String], index: usize) -> Result<(&'a str, &'a str), ReplayError> {
    let line = lines
        .get(index)
        .ok_or_else(|| malformed(index, "missing metadata line"))?;
    line.split_once(',')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| malformed(index, format!("expected key,value but found {:?}", line)))
}

fn expect_key(index: usize, found: &str, expected: &str) -> Result<(), ReplayError> {
    if found == expected {
        Ok(())
    } else {
        Err(malformed(
            index,
            format!("expected key {:?} but found {:?}", expected, found),
        ))
    }
}

fn parse_value<T: FromStr>(index: usize, value: &str, what: &str) -> Result<T, ReplayError> {
    value
        .parse()
        .map_err(|_| malformed(index, format!("invalid {} {:?}", what, value)))
}

/// Parses the four metadata lines.
#[instrument(skip(lines))]
pub fn parse_header(lines: &[String]) -> Result<SessionHeader, ReplayError> {
    let (key, value) = metadata(lines, 0)?;
    expect_key(0, key, BOARD_SIZE_KEY)?;
    let size: usize = parse_value(0, value, "board size")?;

    let (key, value) = metadata(lines, 1)?;
    expect_key(1, key, GAME_MODE_KEY)?;
    let mode: Mode = parse_value(1, value, "game mode")?;

    let mut kinds = [PlayerKind::Human; 2];
    for (slot, color) in Color::iter().enumerate() {
        let index = 2 + slot;
        let (key, value) = metadata(lines, index)?;
        expect_key(index, key, &color.to_string())?;
        kinds[slot] = parse_value(index, value, "player type")?;
    }

    if let Some(separator) = lines.get(FIRST_MOVE_LINE - 1)
        && !separator.trim().is_empty()
    {
        return Err(malformed(FIRST_MOVE_LINE - 1, "expected blank separator line"));
    }

    Ok(SessionHeader {
        size,
        mode,
        blue: kinds[0],
        red: kinds[1],
    })
}

/// Parses one `color,letter,row,col` line.
pub fn parse_move(index: usize, line: &str) -> Result<Move, ReplayError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [color, letter, row, col] = fields.as_slice() else {
        return Err(malformed(
            index,
            format!("expected color,letter,row,col but found {:?}", line),
        ));
    };
    Ok(Move::new(
        parse_value::<Color>(index, color, "color")?,
        parse_value::<Letter>(index, letter, "letter")?,
        parse_value(index, row, "row")?,
        parse_value(index, col, "column")?,
    ))
}

/// Feeds a recorded session back through the engine, one move at a time.
#[derive(Debug, Clone)]
pub struct ReplayDriver {
    header: SessionHeader,
    game: Game,
    /// (zero-based line index, move)
    moves: Vec<(usize, Move)>,
    cursor: usize,
}

impl ReplayDriver {
    /// Reads the recorder's log and prepares a replay.
    #[instrument(skip(recorder))]
    pub fn load(recorder: &GameRecorder) -> Result<Self, ReplayError> {
        let lines = recorder.load_session()?;
        Self::from_lines(&lines)
    }

    /// Prepares a replay from log lines. Every line is parsed up front, so a
    /// malformed log is rejected before any move is applied.
    #[instrument(skip(lines), fields(lines = lines.len()))]
    pub fn from_lines(lines: &[String]) -> Result<Self, ReplayError> {
        let header = parse_header(lines)?;
        let game = Game::new(header.size, header.mode, header.blue, header.red)
            .map_err(ReplayError::BoardSize)?;

        let moves = lines
            .iter()
            .enumerate()
            .skip(FIRST_MOVE_LINE)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| parse_move(index, line).map(|mov| (index, mov)))
            .collect::<Result<Vec<_>, _>>()?;

        info!(size = header.size, mode = %header.mode, moves = moves.len(), "Replay loaded");
        Ok(Self {
            header,
            game,
            moves,
            cursor: 0,
        })
    }

    /// Returns the recorded metadata.
    pub fn header(&self) -> &SessionHeader {
        &self.header
    }

    /// Returns the game as replayed so far.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Number of moves not yet replayed.
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    /// Returns true once every recorded move has been applied.
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Applies the next recorded move. `None` once the log is exhausted.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn step(&mut self) -> Option<Result<MoveReport, ReplayError>> {
        let (index, mov) = *self.moves.get(self.cursor)?;
        self.cursor += 1;
        debug!(%mov, "Replaying move");
        Some(self.game.apply_move(mov).map_err(|source| {
            warn!(line_number = index + 1, error = %source, "Recorded move rejected");
            ReplayError::Move {
                line_number: index + 1,
                source,
            }
        }))
    }

    /// Applies every remaining move in log order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<MoveReport>, ReplayError> {
        let mut reports = Vec::with_capacity(self.remaining());
        while let Some(report) = self.step() {
            reports.push(report?);
        }
        info!(scores = ?self.game.scores(), outcome = ?self.game.outcome(), "Replay finished");
        Ok(reports)
    }

    /// Summarizes the replayed state.
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            board_size: self.header.size,
            mode: self.header.mode,
            blue: self.header.blue,
            red: self.header.red,
            moves_replayed: self.cursor,
            scores: self.game.scores(),
            outcome: self.game.outcome(),
            board: self.game.board().render(),
        }
    }
}

/// Serializable result of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Board edge length.
    pub board_size: usize,
    /// Win condition.
    pub mode: Mode,
    /// Who controlled Blue.
    pub blue: PlayerKind,
    /// Who controlled Red.
    pub red: PlayerKind,
    /// Moves applied.
    pub moves_replayed: usize,
    /// Final scores.
    pub scores: Scores,
    /// Final outcome, if the recorded game finished.
    pub outcome: Option<Outcome>,
    /// Rendered final board.
    pub board: String,
}
