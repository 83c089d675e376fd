//! User settings loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ConfigError;

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "timetravel_tictactoe.toml";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "timetravel_tictactoe.log";

/// Settings for the terminal game.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Show the move list oldest first.
    order_ascending: bool,

    /// File receiving tracing output while the TUI owns the terminal.
    log_file: PathBuf,

    /// Capture mouse clicks.
    mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order_ascending: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            mouse: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        let settings: Self =
            toml::from_str(&content).map_err(|err| ConfigError::parse(path, err))?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        descending: bool,
        log_file: Option<PathBuf>,
        no_mouse: bool,
    ) -> Self {
        if descending {
            self.order_ascending = false;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if no_mouse {
            self.mouse = false;
        }
        self
    }
}
