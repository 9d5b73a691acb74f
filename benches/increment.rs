//! Increment strategy benchmarks.
//!
//! Sweeps the cardinality from a single slot (every trial collides) to the
//! whole buffer (almost no trial collides) for each strategy, once driven
//! from a single thread and once from several threads sharing one buffer.
//!
//! Run with: cargo bench --bench increment

use std::sync::atomic::AtomicIsize;
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use randomfill::buffer;

const SIZE: usize = 1 << 16;
const TRIALS: usize = 100_000;
const THREADS: usize = 4;
const CARDINALITIES: [usize; 5] = [1, 1 << 4, 1 << 8, 1 << 12, SIZE];

type Entry = fn(&[AtomicIsize], usize, usize, usize, &AtomicIsize) -> f64;

fn naive(fillme: &[AtomicIsize], size: usize, trials: usize, card: usize, _: &AtomicIsize) -> f64 {
    randomfill::naive(fillme, size, trials, card)
}

fn atomic(fillme: &[AtomicIsize], size: usize, trials: usize, card: usize, _: &AtomicIsize) -> f64 {
    randomfill::atomic(fillme, size, trials, card)
}

const ENTRIES: [(&str, Entry); 3] =
    [("naive", naive), ("atomic", atomic), ("cassafe", randomfill::cassafe)];

/// Returns the summed elapsed seconds reported by `iters` runs.
fn measure(iters: u64, entry: Entry, threads: usize, cardinality: usize) -> Duration {
    let fillme = buffer::zeroed(SIZE);
    let collisions = AtomicIsize::new(0);
    let barrier = Barrier::new(threads);

    let mut total = 0.0;
    for _ in 0..iters {
        total += thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        entry(&fillme, SIZE, TRIALS, cardinality, &collisions)
                    })
                })
                .collect();

            // mean over all threads, like every thread ran on its own core
            let sum: f64 = handles.into_iter().map(|handle| handle.join().unwrap()).sum();
            sum / threads as f64
        });
    }

    Duration::from_secs_f64(total)
}

fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment/single");
    group.throughput(Throughput::Elements(TRIALS as u64));

    for &(name, entry) in &ENTRIES {
        for &cardinality in &CARDINALITIES {
            group.bench_function(BenchmarkId::new(name, cardinality), |b| {
                b.iter_custom(|iters| measure(iters, entry, 1, cardinality))
            });
        }
    }

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment/contended");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements((TRIALS * THREADS) as u64));

    for &(name, entry) in &ENTRIES {
        for &cardinality in &CARDINALITIES {
            group.bench_function(BenchmarkId::new(name, cardinality), |b| {
                b.iter_custom(|iters| measure(iters, entry, THREADS, cardinality))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_threaded, bench_contended);
criterion_main!(benches);
