//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Games opened at startup.
    #[serde(default = "default_initial_games")]
    initial_games: usize,

    /// Show the (row, col) of each move in the history pane.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Where tracing output goes while the terminal is in raw mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_initial_games() -> usize {
    1
}

fn default_show_coordinates() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timeline_tui.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_games: default_initial_games(),
            show_coordinates: default_show_coordinates(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;

        info!(
            initial_games = config.initial_games,
            show_coordinates = config.show_coordinates,
            "Config loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the number of startup games.
    pub fn with_initial_games(mut self, initial_games: usize) -> Self {
        self.initial_games = initial_games;
        self
    }

    /// Overrides the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
