//! Command-line interface for strictly_sos.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_sos::{ConfigError, GameConfig, Mode, PlayerKind};

/// Log path used when neither a flag nor the config file names one.
pub const DEFAULT_LOG: &str = "game_record.txt";

/// Strictly SOS - SOS board game with a computer opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_sos")]
#[command(about = "Play and replay games of SOS", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal, one `row col letter` move per line
    Play(PlayArgs),

    /// Replay a recorded game
    Replay {
        /// Move log path
        #[arg(short, long, default_value = DEFAULT_LOG)]
        log: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings for `play`. Flags override the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board edge length (3-10)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Win condition (Simple or General)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Who controls Blue (HUMAN or COMPUTER)
    #[arg(long)]
    pub blue: Option<PlayerKind>,

    /// Who controls Red (HUMAN or COMPUTER)
    #[arg(long)]
    pub red: Option<PlayerKind>,

    /// Move log path
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Seed for the computer player
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Loads the config file, if any, and applies flag overrides.
    pub fn to_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if self.mode.is_some() {
            config = config.with_mode(self.mode);
        }
        if let Some(blue) = self.blue {
            config = config.with_blue(blue);
        }
        if let Some(red) = self.red {
            config = config.with_red(red);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        let log = self
            .log
            .clone()
            .or_else(|| config.log_path().clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG));
        Ok(config.with_log_path(Some(log)))
    }
}
