//! Appender implementations

pub mod console;
pub mod daily_file;

pub use console::ConsoleAppender;
pub use daily_file::{resolve_log_path, DailyFileAppender, ROTATION_INTERVAL_SECS};

pub use crate::core::Appender;
