//! Logging macros with a level check in front of the builder.
//!
//! Each macro takes a logger and a list of values. When the level is
//! filtered out, no builder is created and the value expressions are not
//! evaluated. Otherwise every value is appended in order, exactly as with
//! [`MessageBuilder::append`](crate::MessageBuilder::append), and the line is
//! tagged with the macro's own `file!()` and `line!()`.
//!
//! # Examples
//!
//! ```
//! use rust_stream_logger::{info, warning, Logger};
//!
//! let logger = Logger::builder().console(false).build();
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port ", port);
//! warning!(logger, "Retry ", 3, " of ", 5);
//! ```

/// Log a list of values at the given level.
///
/// # Examples
///
/// ```
/// # use rust_stream_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build();
/// use rust_stream_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_enabled(level) {
            #[allow(unused_mut, unused_variables)]
            let mut builder = logger.stream_at(level, file!(), line!());
            $( builder.append($value); )*
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_stream_logger::prelude::*;
/// # let logger = Logger::builder().console(false).min_level(LogLevel::Debug).build();
/// use rust_stream_logger::debug;
/// debug!(logger, "Counter value: ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $value)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $value)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $value)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $value)*)
    };
}

/// Log at error level with a `FATAL ERROR: file:line - ` prefix.
///
/// ```
/// # use rust_stream_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build();
/// use rust_stream_logger::fatal;
/// fatal!(logger, "Unable to recover from error: ", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.is_enabled($crate::LogLevel::Error) {
            #[allow(unused_mut, unused_variables)]
            let mut builder = logger.fatal_at(file!(), line!());
            $( builder.append($value); )*
        }
    }};
}
