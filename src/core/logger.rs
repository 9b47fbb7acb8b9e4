//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_record::LogRecord,
    message::MessageBuilder,
    metrics::LoggerMetrics,
    timestamp::{Clock, SystemClock, TimestampCache},
};
use crate::appenders::{ConsoleAppender, DailyFileAppender};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Sink state guarded by the logger's single lock.
struct SinkState {
    console_enabled: bool,
    console: ConsoleAppender,
    file_enabled: bool,
    /// `None` when no base path is configured
    file: Option<DailyFileAppender>,
    /// Set after an open failure has been reported, cleared on success
    file_failing: bool,
    timestamp: TimestampCache,
}

impl SinkState {
    /// Open (or re-open) the log file for the date of `now`.
    fn reopen_file(&mut self, now: &DateTime<Local>, metrics: &LoggerMetrics) -> Result<PathBuf> {
        let sink = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::file_appender("", "no log file configured"))?;

        match sink.open(now) {
            Ok(path) => {
                let path = path.to_path_buf();
                metrics.record_file_open();
                self.file_failing = false;
                Ok(path)
            }
            Err(e) => {
                metrics.record_file_open_failure();
                if !self.file_failing {
                    eprintln!(
                        "[LOGGER WARNING] {}. File output is suspended until the file can be opened.",
                        e
                    );
                    self.file_failing = true;
                }
                Err(e)
            }
        }
    }
}

/// Leveled logger writing to the console and/or a date-rotated file.
///
/// The minimum level is an atomic, so statements below it return before any
/// lock is taken or any text is formatted. Everything else (sink switches,
/// the file handle, the timestamp cache) sits behind one mutex, which keeps
/// lines from different threads whole.
///
/// Logging never fails from the caller's point of view: a sink that cannot
/// be written is skipped for that call and the failure is counted in
/// [`metrics`](Self::metrics).
///
/// # Examples
///
/// ```
/// use rust_stream_logger::{Logger, LogLevel};
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .console(false)
///     .build();
///
/// logger.debug().append("cache size: ").append(128);
/// logger.fatal().append("unrecoverable state");
/// assert_eq!(logger.metrics().total_logged(), 2);
/// ```
pub struct Logger {
    min_level: AtomicU8,
    sinks: Mutex<SinkState>,
    clock: Arc<dyn Clock>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger at `INFO` with console output on and file output off
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger configured from `config`
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = LoggerBuilder::new().console(config.console).build();
        logger.apply_config(config);
        logger
    }

    /// The process-wide logger, created with default settings on first use.
    ///
    /// Every call returns the same instance.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    pub fn set_level(&self, level: LogLevel) {
        self.min_level.store(level.as_u8(), Ordering::Release);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Whether a record at `level` would be written. Lock-free.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.as_u8() >= self.min_level.load(Ordering::Acquire)
    }

    pub fn set_console_enabled(&self, enabled: bool) {
        self.sinks.lock().console_enabled = enabled;
    }

    pub fn console_enabled(&self) -> bool {
        self.sinks.lock().console_enabled
    }

    /// Turn file output on or off.
    ///
    /// Enabling with a non-empty `base_path` closes any open file and opens
    /// the file for today's date in append mode, even when the same path is
    /// already active; calling it again is how to force a rotation. An empty
    /// path leaves file output off. Failures are not reported; see
    /// [`try_set_file_output`](Self::try_set_file_output).
    pub fn set_file_output(&self, enable: bool, base_path: impl AsRef<Path>) {
        let _ = self.try_set_file_output(enable, base_path);
    }

    /// [`set_file_output`](Self::set_file_output) that reports the outcome.
    ///
    /// Returns the resolved path of the opened file, or `None` when file
    /// output ends up off.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened. File output stays
    /// configured and the next logging call tries to open it again.
    pub fn try_set_file_output(
        &self,
        enable: bool,
        base_path: impl AsRef<Path>,
    ) -> Result<Option<PathBuf>> {
        let base_path = base_path.as_ref();
        let mut sinks = self.sinks.lock();

        sinks.file_enabled = enable;
        sinks.file_failing = false;
        // Dropping the appender closes its file before a new one is opened
        drop(sinks.file.take());

        if !enable || base_path.as_os_str().is_empty() {
            return Ok(None);
        }

        sinks.file = Some(DailyFileAppender::new(base_path));
        let now = self.clock.now();
        sinks.reopen_file(&now, &self.metrics).map(Some)
    }

    /// Whether records are routed to a log file
    pub fn file_enabled(&self) -> bool {
        let sinks = self.sinks.lock();
        sinks.file_enabled && sinks.file.is_some()
    }

    /// Resolved path of the currently open log file
    pub fn current_file_path(&self) -> Option<PathBuf> {
        let sinks = self.sinks.lock();
        sinks
            .file
            .as_ref()
            .and_then(|f| f.current_path())
            .map(Path::to_path_buf)
    }

    /// Unix second at which the current log file was opened
    pub fn file_opened_at(&self) -> Option<i64> {
        self.sinks.lock().file.as_ref().and_then(|f| f.opened_at())
    }

    /// Apply level, console and file settings from `config`
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.set_level(config.level);
        self.set_console_enabled(config.console);
        match &config.file {
            Some(path) => self.set_file_output(true, path),
            None => self.set_file_output(false, ""),
        }
    }

    /// Write one record to every enabled sink.
    pub fn log(&self, level: LogLevel, message: &str, file: &str, line: u32) {
        if !self.is_enabled(level) {
            return;
        }

        let mut guard = self.sinks.lock();
        let now = self.clock.now();
        guard.timestamp.refresh(&now);

        if guard.file_enabled
            && guard.file.as_ref().is_some_and(|f| f.needs_reopen(&now))
        {
            // Failure is counted and reported inside; the file is skipped below
            let _ = guard.reopen_file(&now, &self.metrics);
        }

        let sinks = &mut *guard;
        let record = LogRecord::new(level, sinks.timestamp.as_str(), file, line, message);

        if sinks.console_enabled {
            let _ = sinks.console.append(&record);
        }

        if sinks.file_enabled {
            if let Some(sink) = sinks.file.as_mut().filter(|f| f.is_open()) {
                if sink.append(&record).is_err() {
                    self.metrics.record_file_write_failure();
                }
            }
        }

        self.metrics.record_logged();
    }

    /// Flush both sinks
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        sinks.console.flush()?;
        if let Some(ref mut file) = sinks.file {
            file.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Debug)
    }

    #[track_caller]
    #[inline]
    pub fn info(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Info)
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Warning)
    }

    #[track_caller]
    #[inline]
    pub fn error(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Error)
    }

    /// `ERROR` builder whose message starts with `FATAL ERROR: file:line - `
    #[track_caller]
    pub fn fatal(&self) -> MessageBuilder<'_> {
        let location = Location::caller();
        self.fatal_at(location.file(), location.line())
    }

    /// Builder for `level` at the caller's source location
    #[track_caller]
    pub fn stream(&self, level: LogLevel) -> MessageBuilder<'_> {
        let location = Location::caller();
        MessageBuilder::new(self, level, location.file(), location.line())
    }

    /// Builder for `level` at an explicit source location
    pub fn stream_at<'a>(&'a self, level: LogLevel, file: &'a str, line: u32) -> MessageBuilder<'a> {
        MessageBuilder::new(self, level, file, line)
    }

    /// Fatal builder at an explicit source location
    pub fn fatal_at<'a>(&'a self, file: &'a str, line: u32) -> MessageBuilder<'a> {
        let mut builder = MessageBuilder::new(self, LogLevel::Error, file, line);
        builder
            .append("FATAL ERROR: ")
            .append(file)
            .append(':')
            .append(line)
            .append(" - ");
        builder
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks.lock();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("console_enabled", &sinks.console_enabled)
            .field("file_enabled", &sinks.file_enabled)
            .field("file", &sinks.file)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_stream_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .console(true)
///     .file("/var/log/app.log")
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    console_enabled: bool,
    console: Option<ConsoleAppender>,
    file: Option<PathBuf>,
    clock: Arc<dyn Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            console_enabled: true,
            console: None,
            file: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enable or disable console output
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    /// Send console output to `writer` instead of standard output
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(ConsoleAppender::with_writer(writer));
        self
    }

    /// Enable file output under `base_path`
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.file = Some(base_path.into());
        self
    }

    /// Read time from `clock` instead of the system clock
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger {
            min_level: AtomicU8::new(self.min_level.as_u8()),
            sinks: Mutex::new(SinkState {
                console_enabled: self.console_enabled,
                console: self.console.unwrap_or_default(),
                file_enabled: false,
                file: None,
                file_failing: false,
                timestamp: TimestampCache::new(),
            }),
            clock: self.clock,
            metrics: LoggerMetrics::new(),
        };

        if let Some(path) = self.file {
            logger.set_file_output(true, path);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
