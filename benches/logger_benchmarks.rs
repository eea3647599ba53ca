//! Criterion benchmarks for minlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minlog::prelude::*;
use minlog::{compose, BufferPool};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Building blocks
// ============================================================================

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_args", |b| {
        b.iter(|| compose(black_box("this is a plain message"), NO_ARGS));
    });

    group.bench_function("template", |b| {
        b.iter(|| compose(black_box("this is run %d in a benchmark"), &[&black_box(42)]));
    });

    group.bench_function("joined", |b| {
        b.iter(|| compose(black_box(""), &[&"user", &black_box(42), &"logged in"]));
    });

    group.finish();
}

fn bench_buffer_pool(c: &mut Criterion) {
    let pool = BufferPool::new();

    c.bench_function("buffer_pool/acquire_release", |b| {
        b.iter(|| {
            let mut buf = pool.acquire();
            buf.extend_from_slice(black_box(b"payload"));
            pool.release(buf);
        });
    });
}

// ============================================================================
// Logging
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new(std::io::sink()).expect("build logger");

    group.bench_function("infof_rendezvous", |b| {
        let mut i = 0u64;
        b.iter(|| {
            logger.infof("this is run %d in a benchmark", &[&i]);
            i += 1;
        });
    });

    let queued = Logger::builder()
        .queue_capacity(1024)
        .target(std::io::sink())
        .build()
        .expect("build logger");

    group.bench_function("infof_queued", |b| {
        let mut i = 0u64;
        b.iter(|| {
            queued.infof("this is run %d in a benchmark", &[&i]);
            i += 1;
        });
    });

    let banded = Logger::builder()
        .min_level(Severity::Info)
        .target(std::io::sink())
        .build()
        .expect("build logger");

    group.bench_function("below_band", |b| {
        b.iter(|| banded.debug(black_box("never written")));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(Logger::new(std::io::sink()).expect("build logger"));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for n in 0..100 {
                                logger.infof("thread %d message %d", &[&t, &n]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compose,
    bench_buffer_pool,
    bench_logging,
    bench_concurrent_logging
);
criterion_main!(benches);
