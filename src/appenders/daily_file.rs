//! Date-suffixed log file with 24-hour rotation
//!
//! The configured base path never names the file that is written. Each open
//! derives a file name carrying the current date (`app.log` becomes
//! `app-20260218.log`) and appends to it. The logger re-opens the file once
//! more than [`ROTATION_INTERVAL_SECS`] have passed since the last open, which
//! moves output to a file named after the new date.

use crate::core::timestamp::date_suffix;
use crate::core::{Appender, LogRecord, LoggerError, Result};
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Seconds a file stays open before the next write re-opens it
pub const ROTATION_INTERVAL_SECS: i64 = 24 * 60 * 60;

/// File name for `base` on the date of `now`.
///
/// The extension of the file name (everything from its last dot) is replaced
/// by `-YYYYMMDD.log`; a name without an extension gets the suffix appended.
///
/// ```
/// use chrono::{Local, TimeZone};
/// use rust_stream_logger::appenders::resolve_log_path;
/// use std::path::{Path, PathBuf};
///
/// let day = Local.with_ymd_and_hms(2026, 2, 18, 9, 0, 0).unwrap();
/// assert_eq!(resolve_log_path(Path::new("app.log"), &day), PathBuf::from("app-20260218.log"));
/// assert_eq!(resolve_log_path(Path::new("app"), &day), PathBuf::from("app-20260218.log"));
/// ```
pub fn resolve_log_path(base: &Path, now: &DateTime<Local>) -> PathBuf {
    let suffix = date_suffix(now);

    match base.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(&suffix);
            base.with_file_name(name)
        }
        None => {
            let mut path = base.as_os_str().to_os_string();
            path.push(&suffix);
            PathBuf::from(path)
        }
    }
}

/// Append-mode log file named after the date it was opened on.
///
/// Holds at most one open handle; [`open`](Self::open) always closes the
/// current one first. Every line is flushed before `append` returns.
#[derive(Debug)]
pub struct DailyFileAppender {
    base_path: PathBuf,
    current_path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
    opened_at: Option<i64>,
}

impl DailyFileAppender {
    /// Create a closed appender for `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            current_path: None,
            writer: None,
            opened_at: None,
        }
    }

    /// Close any open file, then open the file for the date of `now`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened. The appender is
    /// left closed in that case.
    pub fn open(&mut self, now: &DateTime<Local>) -> Result<&Path> {
        self.close();

        let path = resolve_log_path(&self.base_path, now);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        self.writer = Some(BufWriter::new(file));
        self.opened_at = Some(now.timestamp());
        Ok(self.current_path.insert(path).as_path())
    }

    /// Flush and release the file handle
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            // Best effort, every line has already been flushed
            let _ = writer.flush();
        }
        self.current_path = None;
        self.opened_at = None;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Whether the next write must re-open the file first: either no file is
    /// open or the current one has been open for more than a day.
    pub fn needs_reopen(&self, now: &DateTime<Local>) -> bool {
        match self.opened_at {
            Some(opened_at) if self.writer.is_some() => {
                now.timestamp() - opened_at > ROTATION_INTERVAL_SECS
            }
            _ => true,
        }
    }

    /// Resolved path of the open file
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Unix second at which the open file was opened
    pub fn opened_at(&self) -> Option<i64> {
        self.opened_at
    }
}

impl Appender for DailyFileAppender {
    fn append(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            LoggerError::file_appender(self.base_path.display().to_string(), "log file is not open")
        })?;

        let written = writeln!(
            writer,
            "{} [{}] {}:{} - {}",
            record.timestamp, record.level, record.file, record.line, record.message
        )
        .and_then(|()| writer.flush());

        if let Err(e) = written {
            let path = self
                .current_path
                .as_deref()
                .unwrap_or(&self.base_path)
                .display()
                .to_string();
            // Drop the handle so the next call tries a fresh open
            self.writer = None;
            self.opened_at = None;
            return Err(LoggerError::file_appender(
                path,
                format!("Failed to write log entry: {}", e),
            ));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "daily_file"
    }
}

impl Drop for DailyFileAppender {
    fn drop(&mut self) {
        self.close();
    }
}
