//! Error types and handling for greet core

use thiserror::Error;

/// Result type alias for greet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for greet core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Prompt input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Errors raised while reading a command from the user
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input stream was closed before a line was available
    #[error("Input exhausted")]
    Exhausted,

    /// The line was longer than the configured cap and was discarded
    #[error("Input exceeds {limit} bytes")]
    TooLong { limit: usize },
}

impl Error {
    /// Whether this error means the input stream is closed
    pub fn is_input_exhausted(&self) -> bool {
        matches!(self, Error::Input(InputError::Exhausted))
    }
}
