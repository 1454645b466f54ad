//! Strictly SOS library - type-safe SOS game engine
//!
//! Two players take turns placing `S` or `O` on a square board, scoring
//! for every new straight S-O-S line they complete.
//!
//! # Architecture
//!
//! - **Engine**: board, line detection, mode rules and turn handling
//! - **Strategist**: heuristic computer player
//! - **Recorder**: flat move log with a metadata header
//! - **Replay**: feeds a recorded log back through the engine
//! - **Session**: ties engine, computer player and log together
//!
//! # Example
//!
//! ```
//! use strictly_sos::{GameConfig, Letter, Mode, PlayerKind, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::default()
//!     .with_board_size(5)
//!     .with_mode(Some(Mode::General))
//!     .with_red(PlayerKind::Computer)
//!     .validate()?;
//!
//! let mut session = Session::start(&config)?;
//! let turn = session.submit(2, 2, Letter::S)?;
//! assert!(!turn.computer.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod recorder;
mod replay;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, ValidConfig};

// Crate-level exports - Move log
pub use recorder::{
    BOARD_SIZE_KEY, FileLog, GAME_MODE_KEY, GameRecorder, HEADER_LINES, LogSink, MemoryLog,
    RecorderError, SessionHeader, move_line,
};

// Crate-level exports - Replay
pub use replay::{ReplayDriver, ReplayError, ReplaySummary, parse_header, parse_move};

// Crate-level exports - Session
pub use session::{Session, SessionError, TurnReport};

// Crate-level exports - Game types (SOS)
pub use games::sos::{
    Board, BoardSizeError, Cell, Color, Coord, Direction, Game, HistoryConsistentInvariant,
    InvalidMoveReason, Invariant, InvariantSet, InvariantViolation, Letter, Lifecycle,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mode, MonotonicBoardInvariant, Move, MoveError, MoveReport,
    Outcome, Player, PlayerKind, ScoreEvent, ScoreLedgerInvariant, Scores, SosInvariants,
    StrategyError, Strategist, Suggestion, Tactic, Transition, Window, find_completion,
};

// Crate-level exports - Rules
pub use games::sos::rules::{apply_mode_transition, completed_windows, count_sos, is_sos};
