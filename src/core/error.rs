//! Error types for the logger system
//!
//! None of these reach the caller of a logging statement; they surface only
//! from the fallible configuration helpers and are counted otherwise.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File sink error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Ordinal outside the defined levels
    #[error("Invalid log level ordinal: {0}")]
    InvalidLevel(u8),

    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    ParseLevel(String),

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }
}
