//! Criterion benchmarks for pooled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pooled_logger::prelude::*;
use pooled_logger::{cached_timestamp, TimeCache};
use std::io;
use std::sync::Arc;

fn discard_logger(level: Level) -> Logger {
    Logger::with_config(Some(
        LoggerConfig::new()
            .with_level(level)
            .with_output(WriterSink::new(io::sink())),
    ))
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Level::Error);

    group.bench_function("filtered_plain", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    group.bench_function("filtered_template", |b| {
        b.iter(|| {
            logger.infof(format_args!("Filtered {}", black_box(42)));
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Level::Debug);

    group.bench_function("info_plain", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_template", |b| {
        b.iter(|| {
            logger.infof(format_args!("request {} took {}ms", black_box(17), black_box(3.5)));
        });
    });

    group.bench_function("info_verbatim_template", |b| {
        b.iter(|| {
            logger.infof(format_args!("constant template"));
        });
    });

    group.bench_function("caller_disabled", |b| {
        logger.set_caller(false, 0);
        b.iter(|| {
            logger.info(black_box("No caller"));
        });
        logger.set_caller(true, 2);
    });

    logger.set_formatter(Arc::new(JsonFormatter));
    group.bench_function("json", |b| {
        b.iter(|| {
            logger.warnf(format_args!("payload size {}", black_box(1024)));
        });
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(discard_logger(Level::Info));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.infof(format_args!("Concurrent message {}", i));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Buffer Pool and Timestamp Benchmarks
// ============================================================================

fn bench_buffer_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_pool");
    group.throughput(Throughput::Elements(1));

    let pool = BufferPool::new();

    group.bench_function("get_put", |b| {
        b.iter(|| {
            let mut buf = pool.get();
            buf.push_str(black_box("some log line"));
            pool.put(buf);
        });
    });

    group.bench_function("fresh_allocation", |b| {
        b.iter(|| {
            let mut buf = Buffer::with_capacity(256);
            buf.push_str(black_box("some log line"));
            black_box(buf)
        });
    });

    group.finish();
}

fn bench_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp");
    group.throughput(Throughput::Elements(1));

    group.bench_function("cached", |b| {
        b.iter(|| black_box(cached_timestamp()));
    });

    group.bench_function("uncached", |b| {
        let format = TimestampFormat::default();
        b.iter(|| black_box(format.format(&chrono::Utc::now())));
    });

    let rfc = TimeCache::new(TimestampFormat::Rfc3339);
    group.bench_function("cached_rfc3339", |b| {
        b.iter(|| black_box(rfc.stamp()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_level_filtering,
    bench_logging,
    bench_concurrent_logging,
    bench_buffer_pool,
    bench_timestamp,
);

criterion_main!(benches);
