//! Helpers for allocating and inspecting target buffers.
//!
//! The benchmark itself never allocates, these are for callers setting up
//! (and checking) a run.

use core::sync::atomic::{AtomicIsize, Ordering};

/// Allocates a buffer of `size` slots, all initialized to zero.
#[inline]
pub fn zeroed(size: usize) -> Vec<AtomicIsize> {
    (0..size).map(|_| AtomicIsize::new(0)).collect()
}

/// Returns the sum of all slots in `buffer`.
///
/// The slots are loaded one by one, so the result is only a consistent
/// snapshot if no increments are in progress.
#[inline]
pub fn total(buffer: &[AtomicIsize]) -> isize {
    buffer.iter().map(|slot| slot.load(Ordering::Relaxed)).fold(0, isize::wrapping_add)
}
