//! Game configuration.

use crate::games::sos::{Board, Mode, PlayerKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Session settings as written in a TOML file or collected from flags.
///
/// ```toml
/// board_size = 5
/// mode = "General"
/// blue = "HUMAN"
/// red = "COMPUTER"
/// log_path = "game_record.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board edge length (3..=10).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Win condition. Must be chosen before a session can start.
    #[serde(default)]
    mode: Option<Mode>,

    /// Who controls Blue.
    #[serde(default)]
    blue: PlayerKind,

    /// Who controls Red.
    #[serde(default)]
    red: PlayerKind,

    /// Where to write the move log. In memory when absent.
    #[serde(default)]
    log_path: Option<PathBuf>,

    /// Seed for the computer player's random fallback.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            mode: None,
            blue: PlayerKind::Human,
            red: PlayerKind::Human,
            log_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(board_size = config.board_size, mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Checks the settings a session needs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board size is outside 3..=10 or no
    /// mode was chosen.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        Board::new(self.board_size).map_err(|e| {
            warn!(board_size = self.board_size, "Rejected board size");
            ConfigError::new(e.to_string())
        })?;
        let mode = self.mode.ok_or_else(|| {
            warn!("No game mode chosen");
            ConfigError::new("No game mode chosen")
        })?;
        Ok(ValidConfig {
            board_size: self.board_size,
            mode,
            blue: self.blue,
            red: self.red,
            log_path: self.log_path.clone(),
            seed: self.seed,
        })
    }
}

/// Configuration that passed [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidConfig {
    board_size: usize,
    mode: Mode,
    blue: PlayerKind,
    red: PlayerKind,
    log_path: Option<PathBuf>,
    seed: Option<u64>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
