//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// The separator pattern failed to compile
    #[error("Invalid separator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Selector syntax not understood by the scanner
    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Cookie value could not be decoded
    #[error("Cookie error: {0}")]
    Cookie(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
