//! The timed trial loop shared by all entry points.

use core::sync::atomic::AtomicIsize;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::config::Workload;
use crate::strategy::IncrementStrategy;
use crate::target::Targets;

/// Performs `workload.trials()` increments into `buffer` at the indices
/// produced by `targets` and returns the elapsed time in seconds.
///
/// Only the trial loop itself is timed, creating (and seeding) `targets` is
/// up to the caller and not part of the measurement.
/// The size and cardinality of `workload` are only reported, the indices are
/// determined by `targets` alone.
///
/// # Panics
///
/// Panics if an index produced by `targets` is outside of `buffer`.
#[inline]
pub fn run<S, R>(
    buffer: &[AtomicIsize],
    workload: &Workload,
    mut targets: Targets<R>,
    strategy: &S,
) -> f64
where
    S: IncrementStrategy,
    R: Rng,
{
    let start = Instant::now();
    for _ in 0..workload.trials() {
        strategy.increment(&buffer[targets.next_index()]);
    }
    let elapsed = as_secs(start.elapsed());

    debug!(
        strategy = S::NAME,
        size = workload.size(),
        trials = workload.trials(),
        cardinality = workload.cardinality(),
        shift = targets.shift(),
        elapsed,
        "benchmark run complete"
    );

    elapsed
}

/// Converts `duration` to seconds, truncated to whole microseconds.
#[inline]
pub fn as_secs(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1_000_000.0
}
