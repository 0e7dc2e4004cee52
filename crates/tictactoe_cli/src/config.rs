//! Settings file for the console game.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::OpponentMode;
use tracing::{debug, info, instrument};

/// File read when `--config` is not given. Absent is fine.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Console game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Opponent for O. When unset the menu is shown.
    #[serde(default)]
    opponent: Option<OpponentMode>,

    /// Seed for the random opponents; unset seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Clear the terminal between prompts.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_clear_screen() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opponent: None,
            seed: None,
            clear_screen: default_clear_screen(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(opponent = ?settings.opponent, seed = ?settings.seed, "Settings loaded");
        Ok(settings)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_PATH`] if it
    /// exists, else defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be read or parsed is an error. So is a
    /// malformed default file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Like [`Settings::load`] with a different fallback file.
    pub fn load_or(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => Self::from_file(fallback),
            None => {
                debug!(path = %fallback.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags on top of the file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.opponent {
            self.opponent = Some(mode);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.no_clear {
            self.clear_screen = false;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
