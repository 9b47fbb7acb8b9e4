//! Streaming message construction
//!
//! A [`MessageBuilder`] collects one log message from a chain of typed values
//! into a fixed-size buffer and hands it to its [`Logger`] exactly once, when
//! it is dropped.

use super::log_level::LogLevel;
use super::logger::Logger;
use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

/// Size of a message buffer, counting one byte reserved for a terminator.
pub const MESSAGE_CAPACITY: usize = 4096;

/// Longest message text a builder can hold.
pub const MAX_MESSAGE_LEN: usize = MESSAGE_CAPACITY - 1;

/// Line-break markers.
///
/// Both produce a single `'\n'`; file output is flushed after every line
/// regardless, so `Flush` has no further effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manip {
    Endl,
    Flush,
}

/// Fixed-capacity text buffer that silently drops what does not fit.
///
/// Text is cut at the last character boundary that fits. Numbers and
/// pointers are written whole or not at all. Once anything has been dropped
/// the buffer is sealed and later appends are ignored, so the content is
/// always a prefix of the full message.
pub struct MessageBuffer {
    bytes: [u8; MAX_MESSAGE_LEN],
    len: usize,
    truncated: bool,
}

impl MessageBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_MESSAGE_LEN],
            len: 0,
            truncated: false,
        }
    }

    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 sequences are ever copied in
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        MAX_MESSAGE_LEN - self.len
    }

    /// Whether any appended data was dropped.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }

        let room = self.remaining();
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            let mut end = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            end
        };

        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
    }

    pub fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8));
    }

    /// Append formatted text, truncating like [`push_str`](Self::push_str).
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        // MessageBuffer's fmt::Write never fails
        let _ = fmt::write(self, args);
    }

    /// Append formatted output only if all of it fits.
    pub fn push_whole(&mut self, args: fmt::Arguments<'_>) {
        if self.truncated {
            return;
        }

        let start = self.len;
        if fmt::write(&mut Whole(self), args).is_err() {
            self.len = start;
            self.truncated = true;
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// Writer that refuses a chunk instead of cutting it.
struct Whole<'b>(&'b mut MessageBuffer);

impl fmt::Write for Whole<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() > self.0.remaining() {
            return Err(fmt::Error);
        }
        self.0.push_str(s);
        Ok(())
    }
}

/// A value that can be appended to a log message.
///
/// Implemented for the usual scalar and text types. `Option` appends nothing
/// for `None`, which is how an absent string is logged.
pub trait Loggable {
    fn append_to(&self, buffer: &mut MessageBuffer);
}

impl<T: Loggable + ?Sized> Loggable for &T {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        (**self).append_to(buffer);
    }
}

impl<T: Loggable> Loggable for Option<T> {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        if let Some(value) = self {
            value.append_to(buffer);
        }
    }
}

impl Loggable for str {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_str(self);
    }
}

impl Loggable for String {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_str(self);
    }
}

impl Loggable for Cow<'_, str> {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_str(self);
    }
}

impl Loggable for CStr {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_str(&self.to_string_lossy());
    }
}

impl Loggable for bool {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_str(if *self { "true" } else { "false" });
    }
}

impl Loggable for char {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_char(*self);
    }
}

impl Loggable for Manip {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_char('\n');
    }
}

impl Loggable for f64 {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_whole(format_args!("{:.4}", self));
    }
}

impl Loggable for f32 {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        f64::from(*self).append_to(buffer);
    }
}

macro_rules! loggable_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                #[inline]
                fn append_to(&self, buffer: &mut MessageBuffer) {
                    buffer.push_whole(format_args!("{}", self));
                }
            }
        )*
    };
}

loggable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: ?Sized> Loggable for *const T {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_whole(format_args!("{:p}", *self));
    }
}

impl<T: ?Sized> Loggable for *mut T {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_whole(format_args!("{:p}", *self));
    }
}

impl Loggable for fmt::Arguments<'_> {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.push_fmt(*self);
    }
}

/// Builder for a single log line, delivered to its logger on drop.
///
/// Obtained from [`Logger::debug`], [`Logger::info`], [`Logger::warning`],
/// [`Logger::error`] or [`Logger::fatal`], which capture the caller's source
/// location. The record is always handed to [`Logger::log`], which applies
/// the level filter at delivery time. To skip formatting entirely for a
/// filtered level, use the macros in [`macros`](crate::macros).
///
/// # Examples
///
/// ```
/// use rust_stream_logger::{Logger, Manip};
///
/// let logger = Logger::builder().console(false).build();
/// logger.info().append("loaded ").append(42).append(" items in ").append(0.25).append('s');
///
/// let mut line = logger.warning();
/// line.append("retrying").append(Manip::Endl);
/// for attempt in 1..=3 {
///     line.append(" attempt=").append(attempt);
/// }
/// // `line` is delivered here
/// ```
pub struct MessageBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    file: &'a str,
    line: u32,
    buffer: MessageBuffer,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(logger: &'a Logger, level: LogLevel, file: &'a str, line: u32) -> Self {
        Self {
            logger,
            level,
            file,
            line,
            buffer: MessageBuffer::new(),
        }
    }

    /// Append one value.
    #[inline]
    pub fn append<T: Loggable>(&mut self, value: T) -> &mut Self {
        value.append_to(&mut self.buffer);
        self
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn file(&self) -> &str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Text accumulated so far
    #[inline]
    pub fn message(&self) -> &str {
        self.buffer.as_str()
    }

    /// Whether the logger would currently write this builder's level
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.logger.is_enabled(self.level)
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.buffer.is_truncated()
    }
}

impl fmt::Write for MessageBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for MessageBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("level", &self.level)
            .field("file", &self.file)
            .field("line", &self.line)
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl Drop for MessageBuilder<'_> {
    fn drop(&mut self) {
        if self.buffer.is_truncated() {
            self.logger.metrics().record_truncated();
        }
        self.logger
            .log(self.level, self.buffer.as_str(), self.file, self.line);
    }
}
