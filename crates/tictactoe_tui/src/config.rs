//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Starting names for both players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayersConfig {
    /// Name shown for X.
    #[serde(default = "default_x")]
    x: String,

    /// Name shown for O.
    #[serde(default = "default_o")]
    o: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Starting player names.
    #[serde(default)]
    players: PlayersConfig,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_o() -> String {
    DEFAULT_O_NAME.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            players: PlayersConfig::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.players.x, o = %config.players.o, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] when it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(x) = player_x {
            self.players.x = x;
        }
        if let Some(o) = player_o {
            self.players.o = o;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Builds the starting player registry.
    pub fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::new(self.players.x.clone(), self.players.o.clone())
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
