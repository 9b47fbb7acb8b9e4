//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use message::{Loggable, Manip, MessageBuffer, MessageBuilder, MAX_MESSAGE_LEN, MESSAGE_CAPACITY};
pub use metrics::LoggerMetrics;
pub use timestamp::{Clock, ManualClock, SystemClock, TimestampCache};
