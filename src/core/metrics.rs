//! Logger metrics for observability
//!
//! Logging never reports failures to its caller, so these counters are the
//! way to tell whether a sink has been quietly dropping output.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what the logger did with each call
///
/// # Example
///
/// ```
/// use rust_stream_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_file_write_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.file_write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls that passed the level filter and were routed to the sinks
    total_logged: AtomicU64,

    /// Lines that could not be written to the log file
    file_write_failures: AtomicU64,

    /// Failed attempts to open (or re-open) the log file
    file_open_failures: AtomicU64,

    /// Successful opens of the log file, rotations included
    file_opens: AtomicU64,

    /// Messages cut short at the builder's capacity
    truncated_messages: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            file_write_failures: AtomicU64::new(0),
            file_open_failures: AtomicU64::new(0),
            file_opens: AtomicU64::new(0),
            truncated_messages: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_failures(&self) -> u64 {
        self.file_write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_open_failures(&self) -> u64 {
        self.file_open_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_opens(&self) -> u64 {
        self.file_opens.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn truncated_messages(&self) -> u64 {
        self.truncated_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write_failure(&self) -> u64 {
        self.file_write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_open_failure(&self) -> u64 {
        self.file_open_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_open(&self) -> u64 {
        self.file_opens.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.truncated_messages.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.file_write_failures.store(0, Ordering::Relaxed);
        self.file_open_failures.store(0, Ordering::Relaxed);
        self.file_opens.store(0, Ordering::Relaxed);
        self.truncated_messages.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            file_write_failures: AtomicU64::new(self.file_write_failures()),
            file_open_failures: AtomicU64::new(self.file_open_failures()),
            file_opens: AtomicU64::new(self.file_opens()),
            truncated_messages: AtomicU64::new(self.truncated_messages()),
        }
    }
}
