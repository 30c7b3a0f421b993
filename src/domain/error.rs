//! Domain error types

use thiserror::Error;

/// Error when a transcript id fails validation
#[derive(Debug, Clone, Error)]
#[error("Invalid transcript id: \"{input}\". An id must be a non-empty string")]
pub struct InvalidTranscriptIdError {
    pub input: String,
}

/// Error when a lookback window is invalid
#[derive(Debug, Clone, Error)]
#[error("Invalid lookback window: {days} days. The window must span at least 1 day")]
pub struct InvalidLookbackError {
    pub days: u32,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
