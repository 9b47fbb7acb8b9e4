//! Log record handed from the logger to its appenders

use super::log_level::LogLevel;

/// One finished logging call.
///
/// Everything is borrowed: the message lives in the caller's
/// [`MessageBuilder`](super::message::MessageBuilder) buffer and the
/// timestamp in the logger's cache, so producing a record never allocates.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    /// `YYYY-MM-DD HH:MM:SS`, local time
    pub timestamp: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, timestamp: &'a str, file: &'a str, line: u32, message: &'a str) -> Self {
        Self {
            level,
            timestamp,
            file,
            line,
            message,
        }
    }
}
