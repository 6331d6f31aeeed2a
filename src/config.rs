//! Game settings loaded from TOML and overridden from the command line.

use crate::players::DEFAULT_COMPUTER_RETRY_LIMIT;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who controls a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from a script or the console.
    Human,
    /// Random legal moves.
    Computer,
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// File that game results are appended to.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// Seed for move randomness; `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Scripted moves for the human player(s), consumed in order.
    #[serde(default = "default_moves")]
    moves: Vec<usize>,

    /// Read human moves from the console instead of the script.
    #[serde(default)]
    interactive: bool,

    /// Controller of X (moves first).
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Controller of O.
    #[serde(default = "default_o")]
    o: PlayerKind,

    /// Rejected moves tolerated from the computer.
    #[serde(default = "default_computer_retry_limit")]
    computer_retry_limit: u32,

    /// Rejected moves tolerated from a human; unlimited when absent.
    #[serde(default)]
    human_retry_limit: Option<u32>,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("game_log.txt")
}

fn default_moves() -> Vec<usize> {
    vec![0, 4, 1, 3, 2]
}

fn default_x() -> PlayerKind {
    PlayerKind::Human
}

fn default_o() -> PlayerKind {
    PlayerKind::Computer
}

fn default_computer_retry_limit() -> u32 {
    DEFAULT_COMPUTER_RETRY_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            seed: None,
            moves: default_moves(),
            interactive: false,
            x: default_x(),
            o: default_o(),
            computer_retry_limit: default_computer_retry_limit(),
            human_retry_limit: None,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Log file path.
    pub log_path: Option<PathBuf>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Scripted moves.
    pub moves: Option<Vec<usize>>,
    /// Force console input.
    pub interactive: bool,
    /// Controller of X.
    pub x: Option<PlayerKind>,
    /// Controller of O.
    pub o: Option<PlayerKind>,
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings = Self::from_toml(&content)?;
        info!(log_path = %settings.log_path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Applies command-line overrides on top of these settings.
    #[instrument(skip(self))]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(log_path) = overrides.log_path {
            self.log_path = log_path;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(moves) = overrides.moves {
            self.moves = moves;
        }
        self.interactive |= overrides.interactive;
        if let Some(x) = overrides.x {
            self.x = x;
        }
        if let Some(o) = overrides.o {
            self.o = o;
        }
        self
    }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
