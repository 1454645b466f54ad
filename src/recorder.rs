//! Flat move log.
//!
//! The log is a newline-delimited text file: four metadata lines, one
//! blank separator, then one `color,letter,row,col` line per move in play
//! order. Where the lines go is up to the injected [`LogSink`].

use crate::games::sos::{Color, Mode, Move, PlayerKind};
use derive_more::{Display, Error};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Key of the board size metadata line.
pub const BOARD_SIZE_KEY: &str = "BoardSize";
/// Key of the game mode metadata line.
pub const GAME_MODE_KEY: &str = "GameMode";
/// Number of lines before the first move (metadata plus separator).
pub const HEADER_LINES: usize = 5;

/// Log read/write failure.
#[derive(Debug, Clone, Display, Error)]
#[display("Recorder error: {} at {}:{}", message, file, line)]
pub struct RecorderError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecorderError {
    /// Creates a new recorder error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RecorderError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

/// Destination for log lines.
pub trait LogSink: std::fmt::Debug + Send {
    /// Discards prior content and writes `lines`.
    fn rewrite(&mut self, lines: &[String]) -> Result<(), RecorderError>;

    /// Appends one line.
    fn append(&mut self, line: &str) -> Result<(), RecorderError>;

    /// Returns every stored line in order.
    fn read_lines(&self) -> Result<Vec<String>, RecorderError>;
}

/// Log stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    /// Creates a sink for `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLog {
    fn rewrite(&mut self, lines: &[String]) -> Result<(), RecorderError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn append(&mut self, line: &str) -> Result<(), RecorderError> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, RecorderError> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
    }
}

/// Log kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    /// Creates an empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogSink for MemoryLog {
    fn rewrite(&mut self, lines: &[String]) -> Result<(), RecorderError> {
        self.lines = lines.to_vec();
        Ok(())
    }

    fn append(&mut self, line: &str) -> Result<(), RecorderError> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, RecorderError> {
        Ok(self.lines.clone())
    }
}

/// Session metadata written at the top of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHeader {
    /// Board edge length.
    pub size: usize,
    /// Win condition.
    pub mode: Mode,
    /// Who controls Blue.
    pub blue: PlayerKind,
    /// Who controls Red.
    pub red: PlayerKind,
}

impl SessionHeader {
    /// The four metadata lines followed by the blank separator.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("{},{}", BOARD_SIZE_KEY, self.size),
            format!("{},{}", GAME_MODE_KEY, self.mode),
            format!("{},{}", Color::Blue, self.blue),
            format!("{},{}", Color::Red, self.red),
            String::new(),
        ]
    }
}

/// Formats a move as a log line.
pub fn move_line(mov: &Move) -> String {
    format!("{},{},{},{}", mov.color, mov.letter, mov.row, mov.col)
}

/// Append-only move log with a metadata header.
#[derive(Debug)]
pub struct GameRecorder {
    sink: Box<dyn LogSink>,
}

impl GameRecorder {
    /// Creates a recorder over any sink.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Creates a recorder writing to a file.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileLog::new(path))
    }

    /// Creates a recorder that keeps the log in memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryLog::new())
    }

    /// Truncates the log and writes fresh session metadata.
    #[instrument(skip(self))]
    pub fn begin_session(&mut self, header: SessionHeader) -> Result<(), RecorderError> {
        self.sink.rewrite(&header.to_lines())?;
        info!("Recording new session");
        Ok(())
    }

    /// Appends one move.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn record_move(&mut self, mov: &Move) -> Result<(), RecorderError> {
        self.sink.append(&move_line(mov))?;
        debug!("Move recorded");
        Ok(())
    }

    /// Returns the stored log, metadata and moves, in order.
    #[instrument(skip(self))]
    pub fn load_session(&self) -> Result<Vec<String>, RecorderError> {
        let lines = self.sink.read_lines()?;
        debug!(lines = lines.len(), "Loaded session log");
        Ok(lines)
    }
}
