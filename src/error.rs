//! Error types for logger configuration and setup
//!
//! Logging calls themselves never fail; these errors only surface from
//! parsing levels, loading configuration, and installing the global subscriber.

use thiserror::Error;

/// Errors that can occur while configuring a logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Level name is not one of DEBUG, INFO, WARN, ERROR
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    /// Configuration document could not be parsed
    #[error("invalid logger configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Global subscriber could not be installed
    #[error("failed to install global subscriber: {0}")]
    Init(String),
}

/// Result type for logger configuration operations
pub type LoggerResult<T> = Result<T, LoggerError>;
