//! Minimal configuration types for greet core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Title shown in the welcome banner when none is configured
pub const DEFAULT_TITLE: &str = "Awesome Program";

/// Longest input line, in bytes, the prompter accepts
pub const DEFAULT_MAX_INPUT_LEN: usize = 256;

/// A fully resolved shell configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Program title used by the greeting and the help menu
    pub title: String,
    /// Whether to emit the clear-screen sequence before banners
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
    /// Maximum accepted input line length in bytes
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
}

fn default_clear_screen() -> bool {
    true
}

fn default_max_input_len() -> usize {
    DEFAULT_MAX_INPUT_LEN
}

impl ShellConfig {
    /// Create a new configuration with the given title and defaults elsewhere
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clear_screen: default_clear_screen(),
            max_input_len: default_max_input_len(),
        }
    }

    /// Set whether banners clear the screen first
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Set the input line cap
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.chars().any(char::is_control) {
            return Err(ConfigError::InvalidValue {
                field: "title".to_string(),
                reason: "must not contain control characters".to_string(),
            });
        }

        if self.max_input_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_input_len".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
