//! Benchmark for stream materialization and lazy evaluation.
//!
//! Measures bounded materialization of corecursive streams and the
//! memoized-thunk fast path.

use corecur::control::Lazy;
use corecur::stream::Stream;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Stream Benchmarks
// =============================================================================

fn benchmark_take_eagerly(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_take_eagerly");

    // fib(93) is the last value that fits in u64
    for size in [10, 45, 90] {
        group.bench_with_input(
            BenchmarkId::new("fibonacci", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let stream = Stream::fibonacci();
                    black_box(stream.take_eagerly(size))
                });
            },
        );
    }

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("from_step", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let stream = Stream::from_step(1_i64, |x| x + 2);
                    black_box(stream.take_eagerly(size))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_bounded_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_take");

    group.bench_function("take_then_materialize", |bencher| {
        bencher.iter(|| {
            let bounded = Stream::fibonacci().take(64);
            black_box(bounded.to_vec())
        });
    });

    group.bench_function("iterator_prefix", |bencher| {
        bencher.iter(|| {
            let prefix: Vec<u64> = Stream::fibonacci().into_iter().take(64).collect();
            black_box(prefix)
        });
    });

    group.finish();
}

// =============================================================================
// Lazy Benchmarks
// =============================================================================

fn benchmark_lazy_force(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_force");

    group.bench_function("initial_evaluation", |bencher| {
        bencher.iter(|| {
            let lazy = Lazy::new(|| {
                let mut sum = 0_u64;
                for index in 0..100 {
                    sum += index;
                }
                sum
            });
            let value = lazy.force();
            black_box(*value)
        });
    });

    group.bench_function("cached_access", |bencher| {
        let lazy = Lazy::new(|| 42_u64);
        let _ = lazy.force();
        bencher.iter(|| black_box(*lazy.force()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_take_eagerly,
    benchmark_bounded_take,
    benchmark_lazy_force
);
criterion_main!(benches);
