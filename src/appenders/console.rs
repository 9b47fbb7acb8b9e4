//! Console appender implementation

use crate::core::{Appender, LogRecord, Result};
use std::fmt;
use std::io::{self, Write};

/// ANSI sequence that ends the colored level token
pub const RESET: &str = "\x1b[0m";

/// Writes `TIMESTAMP [LEVEL] file:line - message` lines, with the level token
/// wrapped in its ANSI color.
///
/// Colors are emitted unconditionally (no terminal detection), so the output
/// is the same whether stdout is a terminal, a pipe or a test buffer.
pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
}

impl ConsoleAppender {
    /// Colored output to standard output
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Colored output to an arbitrary writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAppender").finish_non_exhaustive()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord<'_>) -> Result<()> {
        writeln!(
            self.writer,
            "{} [\x1b[{}m{}{}] {}:{} - {}",
            record.timestamp,
            record.level.color().to_fg_str(),
            record.level,
            RESET,
            record.file,
            record.line,
            record.message
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn record(level: LogLevel, message: &str) -> LogRecord<'_> {
        LogRecord::new(level, "2026-02-18 10:30:45", "src/main.rs", 12, message)
    }

    #[test]
    fn test_colored_line() {
        let buf = SharedBuf::default();
        let mut appender = ConsoleAppender::with_writer(buf.clone());

        appender.append(&record(LogLevel::Info, "server started")).unwrap();
        assert_eq!(
            buf.contents(),
            "2026-02-18 10:30:45 [\x1b[32mINFO\x1b[0m] src/main.rs:12 - server started\n"
        );
        assert_eq!(appender.name(), "console");
    }

    #[test]
    fn test_level_colors() {
        let expected = [
            (LogLevel::Debug, "\x1b[34mDEBUG\x1b[0m"),
            (LogLevel::Info, "\x1b[32mINFO\x1b[0m"),
            (LogLevel::Warning, "\x1b[33mWARNING\x1b[0m"),
            (LogLevel::Error, "\x1b[31mERROR\x1b[0m"),
        ];

        for (level, token) in expected {
            let buf = SharedBuf::default();
            let mut appender = ConsoleAppender::with_writer(buf.clone());
            appender.append(&record(level, "")).unwrap();
            assert!(
                buf.contents().contains(&format!("[{}]", token)),
                "{:?}: {:?}",
                level,
                buf.contents()
            );
        }
    }
}
