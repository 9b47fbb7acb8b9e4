//! # Rust Stream Logger
//!
//! A small, embeddable logging facility: leveled, timestamped lines on the
//! console and/or in a log file that rotates by date, built through a
//! streaming message builder.
//!
//! ## Features
//!
//! - **Cheap when filtered**: the level check is a single atomic load
//! - **Streaming messages**: chain typed values into a fixed 4 KiB buffer,
//!   delivered as one line when the builder goes out of scope
//! - **Daily files**: `app.log` is written as `app-YYYYMMDD.log` and moves to
//!   a new file after 24 hours
//! - **Never fails the caller**: sink errors are skipped and counted
//!
//! ```
//! use rust_stream_logger::{info, Logger, LogLevel, Manip};
//!
//! let logger = Logger::global();
//! logger.set_level(LogLevel::Debug);
//! logger.set_console_enabled(false);
//!
//! logger.info().append("listening on port ").append(8080);
//! logger.warning().append("slow request: ").append(1.5).append(" s").append(Manip::Endl);
//! info!(logger, "connections: ", 12);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, DailyFileAppender};
    pub use crate::core::{
        Appender, Clock, LogLevel, LogRecord, Loggable, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Manip, MessageBuilder, Result,
    };
}

pub use appenders::{ConsoleAppender, DailyFileAppender};
pub use core::{
    Appender, Clock, LogLevel, LogRecord, Loggable, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ManualClock, Manip, MessageBuffer, MessageBuilder, Result,
    SystemClock, MAX_MESSAGE_LEN, MESSAGE_CAPACITY,
};
