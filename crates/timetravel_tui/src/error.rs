//! Settings file errors.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure to load the settings file, with the file involved and the
/// code location that reported it.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error in {}: {} at {}:{}", path.display(), message, file, line)]
pub struct ConfigError {
    /// Settings file that could not be loaded.
    pub path: PathBuf,
    /// What went wrong while reading or parsing it.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a settings error for `path` with caller location tracking.
    #[track_caller]
    #[instrument(skip(message), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The settings file could not be read.
    #[track_caller]
    pub fn read(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::new(path, format!("Failed to read config file: {}", err))
    }

    /// The settings file is not valid settings TOML.
    #[track_caller]
    pub fn parse(path: impl AsRef<Path>, err: toml::de::Error) -> Self {
        Self::new(path, format!("Failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_file_and_origin() {
        let err = ConfigError::new("settings.toml", "bad value");
        let text = err.to_string();
        assert!(text.starts_with("Config error in settings.toml: bad value at "));
        assert!(text.contains("error.rs"), "{text}");
    }
}
