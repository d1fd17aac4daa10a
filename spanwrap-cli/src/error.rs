//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Segmentation error from core
    SegmentationError(String),
    /// URL check failed before a status was received
    UrlCheckError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SegmentationError(msg) => write!(f, "Segmentation error: {msg}"),
            CliError::UrlCheckError(msg) => write!(f, "URL check failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<spanwrap_core::Error> for CliError {
    fn from(error: spanwrap_core::Error) -> Self {
        match error {
            spanwrap_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::SegmentationError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
