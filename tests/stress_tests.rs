//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from many threads are never interleaved or lost
//! - Level and sink changes can race with logging without panics
//! - Rotation under concurrent load keeps every line

use chrono::{Local, TimeDelta, TimeZone};
use rust_stream_logger::prelude::*;
use rust_stream_logger::ManualClock;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 500;

fn clock() -> ManualClock {
    ManualClock::new(
        Local
            .with_ymd_and_hms(2026, 2, 18, 12, 0, 0)
            .single()
            .expect("valid datetime"),
    )
}

/// `<thread>:<seq>` recovered from a line written by these tests
fn parse_payload(line: &str) -> Option<(usize, usize)> {
    let (_, message) = line.split_once(" - ")?;
    let payload = message.strip_prefix("worker ")?;
    let (thread_id, seq) = payload.split_once(" message ")?;
    Some((thread_id.parse().ok()?, seq.parse().ok()?))
}

fn read_all_lines(dir: &TempDir) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in fs::read_dir(dir.path()).expect("Failed to read temp dir") {
        let path = entry.expect("dir entry").path();
        let content = fs::read_to_string(&path).expect("Failed to read log file");
        lines.extend(content.lines().map(str::to_owned));
    }
    lines
}

#[test]
fn test_concurrent_writers_keep_lines_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        Logger::builder()
            .console(false)
            .clock(clock())
            .file(temp_dir.path().join("stress.log"))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger
                        .info()
                        .append("worker ")
                        .append(t)
                        .append(" message ")
                        .append(i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = read_all_lines(&temp_dir);
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("2026-02-18 12:00:00 [INFO] "), "{:?}", line);
        let payload = parse_payload(line).unwrap_or_else(|| panic!("garbled line: {:?}", line));
        assert!(seen.insert(payload), "duplicate line: {:?}", line);
    }

    // Each thread's lines appear in the order it wrote them
    for t in 0..THREADS {
        let sequence: Vec<usize> = lines
            .iter()
            .filter_map(|l| parse_payload(l))
            .filter(|(id, _)| *id == t)
            .map(|(_, seq)| seq)
            .collect();
        assert_eq!(sequence, (0..MESSAGES_PER_THREAD).collect::<Vec<_>>());
    }

    assert_eq!(
        logger.metrics().total_logged(),
        (THREADS * MESSAGES_PER_THREAD) as u64
    );
    assert_eq!(logger.metrics().file_write_failures(), 0);
}

#[test]
fn test_level_changes_race_with_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        Logger::builder()
            .min_level(LogLevel::Debug)
            .console(false)
            .clock(clock())
            .file(temp_dir.path().join("levels.log"))
            .build(),
    );

    let writers: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    let level = LogLevel::ALL[i % LogLevel::ALL.len()];
                    logger.stream(level).append("worker ").append(t).append(" message ").append(i);
                }
            })
        })
        .collect();

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                logger.set_level(LogLevel::ALL[i % LogLevel::ALL.len()]);
            }
            logger.set_level(LogLevel::Debug);
        })
    };

    for handle in writers {
        handle.join().expect("Thread panicked");
    }
    toggler.join().expect("Toggler panicked");

    let lines = read_all_lines(&temp_dir);
    assert_eq!(lines.len() as u64, logger.metrics().total_logged());
    assert!(lines.len() <= THREADS * MESSAGES_PER_THREAD);
    assert!(lines.iter().all(|l| parse_payload(l).is_some()));
}

#[test]
fn test_sink_reconfiguration_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base = temp_dir.path().join("reconf.log");
    let logger = Arc::new(
        Logger::builder()
            .console(false)
            .clock(clock())
            .file(&base)
            .build(),
    );

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger.warning().append("worker ").append(t).append(" message ").append(i);
                }
            })
        })
        .collect();

    let reconfigure = {
        let logger = Arc::clone(&logger);
        let base = base.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                logger.set_file_output(true, &base);
                logger.set_console_enabled(false);
            }
        })
    };

    for handle in writers {
        handle.join().expect("Thread panicked");
    }
    reconfigure.join().expect("Reconfigure thread panicked");

    // Re-opening appends to the same dated file, so nothing is lost
    let lines = read_all_lines(&temp_dir);
    assert_eq!(lines.len(), 4 * MESSAGES_PER_THREAD);
    assert!(lines.iter().all(|l| parse_payload(l).is_some()));
    assert_eq!(logger.metrics().file_opens(), 51);
}

#[test]
fn test_rotation_under_load_keeps_every_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = clock();
    let logger = Arc::new(
        Logger::builder()
            .console(false)
            .clock(clock.clone())
            .file(temp_dir.path().join("roll.log"))
            .build(),
    );

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger.error().append("worker ").append(t).append(" message ").append(i);
                }
            })
        })
        .collect();

    // Jump past the rotation interval while writers are running
    clock.advance(TimeDelta::hours(24) + TimeDelta::seconds(1));

    for handle in writers {
        handle.join().expect("Thread panicked");
    }
    logger.error().append("worker 9 message 0");

    let lines = read_all_lines(&temp_dir);
    assert_eq!(lines.len(), 4 * MESSAGES_PER_THREAD + 1);
    assert!(temp_dir.path().join("roll-20260219.log").exists());
    assert!(fs::read_to_string(temp_dir.path().join("roll-20260219.log"))
        .expect("Failed to read rotated file")
        .contains("worker 9 message 0"));
}
