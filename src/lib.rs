//! Throughput cost of synchronized increments under controllable collision
//! rates.
//!
//! Many concurrent writers incrementing slots of one shared buffer pay for
//! whatever synchronization keeps their updates from getting lost.
//! How much they pay depends mostly on how often two writers hit the same slot
//! at the same time.
//! This crate measures that cost for three increment strategies:
//!
//! - [`naive`]: a plain load followed by a store, which loses updates when
//!   writers collide,
//! - [`atomic`]: a hardware fetch-and-add,
//! - [`cassafe`]: a manually retried compare-and-swap that counts every failed
//!   attempt as a *collision*.
//!
//! [`atomic_with_collisions`] has the signature of [`cassafe`] but performs a
//! fetch-and-add, so both strategies can be driven through the same call shape.
//! Its collision counter always stays untouched.
//!
//! # Collision Rate
//!
//! Every trial draws a uniformly distributed value in `[0, cardinality)` and
//! shifts it left by `floor(log2(size / cardinality))`, see [`shift`].
//! The resulting indices are `cardinality` equally spaced slots spread across
//! the whole buffer.
//! A small cardinality funnels all trials into few slots (many collisions), a
//! cardinality close to `size` spreads them across (almost) all of them.
//!
//! # Preconditions
//!
//! `size` and `cardinality` must both be powers of two with
//! `1 <= cardinality <= size`, and the buffer must hold at least `size` slots.
//! The entry points do **not** check this.
//! Violating it results in a misaligned spread of indices or a panic when an
//! index runs past the end of the buffer.
//! [`Workload::checked`] and [`Workload::check_buffer`] validate the parameters
//! up front for callers that want an error instead.
//!
//! # Concurrency
//!
//! The entry points are single-threaded loops.
//! They are meant to be called from several threads at once against the same
//! buffer, which is the scenario being measured, but the crate does not spawn
//! or coordinate any threads itself.
//! Each call owns its random number generator, so concurrent calls share
//! nothing but the buffer and (optionally) the collision counter.

#![warn(missing_docs)]

pub mod buffer;
pub mod harness;
pub mod strategy;

mod config;
mod error;
mod target;


use core::sync::atomic::AtomicIsize;

use cfg_if::cfg_if;

pub use crate::config::{Workload, WorkloadBuilder};
pub use crate::error::WorkloadError;
pub use crate::strategy::{Atomic, AtomicCounting, CasSafe, IncrementStrategy, Naive};
pub use crate::target::{shift, Targets};

////////////////////////////////////////////////////////////////////////////////////////////////////
// entry points
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Performs `trials` unsynchronized increments into `buffer` and returns the
/// elapsed time in seconds.
///
/// Concurrent calls on the same buffer race with each other and lose updates.
///
/// # Panics
///
/// Panics if `cardinality` is 0 or if a computed index is outside of `buffer`.
#[inline]
pub fn naive(buffer: &[AtomicIsize], size: usize, trials: usize, cardinality: usize) -> f64 {
    Workload::with_params(size, trials, cardinality).run(buffer, &Naive)
}

/// Performs `trials` atomic (relaxed) increments into `buffer` and returns the
/// elapsed time in seconds.
///
/// # Panics
///
/// Panics if `cardinality` is 0 or if a computed index is outside of `buffer`.
#[inline]
pub fn atomic(buffer: &[AtomicIsize], size: usize, trials: usize, cardinality: usize) -> f64 {
    Workload::with_params(size, trials, cardinality).run(buffer, &Atomic)
}

/// Performs `trials` compare-and-swap increments into `buffer` and returns the
/// elapsed time in seconds.
///
/// Every failed compare-and-swap increments `collisions` by one before the
/// operation is retried.
/// The counter is never reset.
///
/// # Panics
///
/// Panics if `cardinality` is 0 or if a computed index is outside of `buffer`.
#[inline]
pub fn cassafe(
    buffer: &[AtomicIsize],
    size: usize,
    trials: usize,
    cardinality: usize,
    collisions: &AtomicIsize,
) -> f64 {
    Workload::with_params(size, trials, cardinality).run(buffer, &CasSafe::new(collisions))
}

/// Performs `trials` atomic (relaxed) increments into `buffer` and returns the
/// elapsed time in seconds.
///
/// Identical to [`atomic`], the `collisions` counter is accepted for symmetry
/// with [`cassafe`] and is never modified, since a fetch-and-add can not fail.
///
/// # Panics
///
/// Panics if `cardinality` is 0 or if a computed index is outside of `buffer`.
#[inline]
pub fn atomic_with_collisions(
    buffer: &[AtomicIsize],
    size: usize,
    trials: usize,
    cardinality: usize,
    collisions: &AtomicIsize,
) -> f64 {
    Workload::with_params(size, trials, cardinality).run(buffer, &AtomicCounting::new(collisions))
}

// The ThreadSanitizer can not correctly assess the plain load/store pair of the
// naive strategy or relaxed RMW operations, so stricter orderings are used when
// instrumentation is chosen.
cfg_if! {
    if #[cfg(feature = "sanitize-threads")] {
        mod sanitize {
            use core::sync::atomic::Ordering;

            pub const RELAXED_LOAD: Ordering = Ordering::Acquire;
            pub const RELAXED_STORE: Ordering = Ordering::Release;
            pub const RELAXED_RMW: Ordering = Ordering::AcqRel;

            pub const CAS_SUCCESS: Ordering = Ordering::AcqRel;
            pub const CAS_FAIL: Ordering = Ordering::Acquire;
        }
    } else {
        mod sanitize {
            use core::sync::atomic::Ordering;

            pub const RELAXED_LOAD: Ordering = Ordering::Relaxed;
            pub const RELAXED_STORE: Ordering = Ordering::Relaxed;
            pub const RELAXED_RMW: Ordering = Ordering::Relaxed;

            pub const CAS_SUCCESS: Ordering = Ordering::AcqRel;
            pub const CAS_FAIL: Ordering = Ordering::Acquire;
        }
    }
}
