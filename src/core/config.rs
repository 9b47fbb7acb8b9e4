//! Declarative logger configuration
//!
//! ```
//! use rust_stream_logger::{Logger, LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "WARNING", "console": false }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Warning);
//!
//! let logger = Logger::from_config(&config);
//! assert!(!logger.console_enabled());
//! ```

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings a [`Logger`](super::Logger) can be configured from.
///
/// Missing fields take the same defaults as [`Logger::new`](super::Logger::new):
/// `INFO`, console on, no file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub console: bool,
    /// Base path of the log file; the written file carries a date suffix
    pub file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
            file: None,
        }
    }
}

impl LoggerConfig {
    /// Parse a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid JSON, names an unknown
    /// level, or contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
