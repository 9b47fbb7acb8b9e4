//! Criterion benchmarks for rust_stream_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_stream_logger::prelude::*;
use rust_stream_logger::{info, MessageBuffer};
use std::io;
use tempfile::TempDir;

fn quiet_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .min_level(level)
        .console_writer(io::sink())
        .build()
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = quiet_logger(LogLevel::Error);

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(LogLevel::Debug))));
    });

    group.bench_function("builder_below_level", |b| {
        b.iter(|| {
            logger
                .debug()
                .append("dropped value ")
                .append(black_box(42))
                .append(black_box(3.25));
        });
    });

    group.bench_function("macro_below_level", |b| {
        b.iter(|| {
            info!(logger, "dropped value ", black_box(42), black_box(3.25));
        });
    });

    group.finish();
}

// ============================================================================
// Message Building Benchmarks
// ============================================================================

fn bench_message_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_building");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mixed_values", |b| {
        b.iter(|| {
            let mut buffer = MessageBuffer::new();
            "request id=".append_to(&mut buffer);
            black_box(918_273_645u64).append_to(&mut buffer);
            " latency=".append_to(&mut buffer);
            black_box(12.75f64).append_to(&mut buffer);
            " cached=".append_to(&mut buffer);
            black_box(true).append_to(&mut buffer);
            black_box(buffer.len())
        });
    });

    group.bench_function("overflowing_text", |b| {
        let chunk = "x".repeat(1000);
        b.iter(|| {
            let mut buffer = MessageBuffer::new();
            for _ in 0..8 {
                chunk.as_str().append_to(&mut buffer);
            }
            black_box(buffer.is_truncated())
        });
    });

    group.finish();
}

// ============================================================================
// Sink Benchmarks
// ============================================================================

fn bench_sinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinks");
    group.throughput(Throughput::Elements(1));

    let console = quiet_logger(LogLevel::Info);
    group.bench_function("console_to_sink", |b| {
        b.iter(|| {
            console.info().append("benchmark message ").append(black_box(7));
        });
    });

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = Logger::builder()
        .console(false)
        .file(temp_dir.path().join("bench.log"))
        .build();
    group.bench_function("file_only", |b| {
        b.iter(|| {
            file.info().append("benchmark message ").append(black_box(7));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filtered, bench_message_building, bench_sinks);
criterion_main!(benches);
