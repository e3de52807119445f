//! Board configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::layout::{BOARD_HEIGHT, BOARD_WIDTH};

/// Board dimensions and initial presentation settings.
///
/// Win detection only knows the 3x3 lines, so any other size is rejected
/// by [`BoardConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    #[serde(default = "default_width")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_height")]
    height: usize,

    /// Start in ascending order, which renders rows and columns reversed.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,
}

fn default_width() -> usize {
    BOARD_WIDTH
}

fn default_height() -> usize {
    BOARD_HEIGHT
}

fn default_sort_ascending() -> bool {
    true
}

impl BoardConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading board config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            width = config.width,
            height = config.height,
            sort_ascending = config.sort_ascending,
            "Board config loaded"
        );
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the dimensions are ones the rules support.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width != BOARD_WIDTH || self.height != BOARD_HEIGHT {
            return Err(ConfigError::new(format!(
                "Unsupported board size {}x{} (only {}x{} is supported)",
                self.width, self.height, BOARD_WIDTH, BOARD_HEIGHT
            )));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            sort_ascending: default_sort_ascending(),
        }
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
