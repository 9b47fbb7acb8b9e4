//! Wall-clock access and timestamp formatting
//!
//! All timestamps are local time. The logger reads time through the [`Clock`]
//! trait so rotation can be exercised without waiting a day.

use chrono::{DateTime, Local, TimeDelta};
use parking_lot::Mutex;
use std::fmt::Write;
use std::sync::Arc;

/// strftime pattern of the timestamp that starts every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// strftime pattern of the suffix that replaces a log file's extension
pub const DATE_SUFFIX_FORMAT: &str = "-%Y%m%d.log";

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a [`Logger`](crate::Logger).
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeDelta, TimeZone};
/// use rust_stream_logger::core::timestamp::{Clock, ManualClock};
///
/// let start = Local.with_ymd_and_hms(2026, 2, 18, 10, 0, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(TimeDelta::hours(25));
/// assert_eq!(clock.now().format("%Y%m%d").to_string(), "20260219");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

/// Formatted `YYYY-MM-DD HH:MM:SS` string for the most recent second seen.
///
/// Formatting happens at most once per wall-clock second; every other call
/// within the same second reuses the cached text.
#[derive(Debug)]
pub struct TimestampCache {
    second: Option<i64>,
    text: String,
}

impl TimestampCache {
    pub fn new() -> Self {
        Self {
            second: None,
            text: String::with_capacity(32),
        }
    }

    /// Re-format if `now` falls in a different second than the cached text.
    ///
    /// Returns `true` when the text was recomputed.
    pub fn refresh(&mut self, now: &DateTime<Local>) -> bool {
        let second = now.timestamp();
        if self.second == Some(second) {
            return false;
        }

        self.text.clear();
        // Writing into a String cannot fail
        let _ = write!(self.text, "{}", now.format(TIMESTAMP_FORMAT));
        self.second = Some(second);
        true
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unix second the cached text belongs to
    pub fn second(&self) -> Option<i64> {
        self.second
    }
}

impl Default for TimestampCache {
    fn default() -> Self {
        Self::new()
    }
}

/// `-YYYYMMDD.log` for the date of `now`.
pub fn date_suffix(now: &DateTime<Local>) -> String {
    now.format(DATE_SUFFIX_FORMAT).to_string()
}
