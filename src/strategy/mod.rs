//! The increment strategies under comparison.

mod cas;

use core::sync::atomic::AtomicIsize;

use crate::sanitize;

pub use self::cas::CasSafe;

////////////////////////////////////////////////////////////////////////////////////////////////////
// IncrementStrategy (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A way of incrementing a single slot of a shared buffer by one.
pub trait IncrementStrategy {
    /// The name under which runs of this strategy are reported.
    const NAME: &'static str;

    /// Increments `slot` by one.
    fn increment(&self, slot: &AtomicIsize);
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Naive
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Increments with a separate load and store.
///
/// The two accesses are each atomic, but the increment as a whole is not, so
/// concurrent writers to the same slot overwrite each other's updates.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Naive;

/********** impl IncrementStrategy ****************************************************************/

impl IncrementStrategy for Naive {
    const NAME: &'static str = "naive";

    #[inline(always)]
    fn increment(&self, slot: &AtomicIsize) {
        let curr = slot.load(sanitize::RELAXED_LOAD);
        slot.store(curr.wrapping_add(1), sanitize::RELAXED_STORE);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Atomic
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Increments with a single relaxed fetch-and-add.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Atomic;

/********** impl IncrementStrategy ****************************************************************/

impl IncrementStrategy for Atomic {
    const NAME: &'static str = "atomic";

    #[inline(always)]
    fn increment(&self, slot: &AtomicIsize) {
        slot.fetch_add(1, sanitize::RELAXED_RMW);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// AtomicCounting
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Increments like [`Atomic`] while holding a collision counter like
/// [`CasSafe`].
///
/// A fetch-and-add never fails, so the counter is never modified.
#[derive(Copy, Clone, Debug)]
pub struct AtomicCounting<'c> {
    collisions: &'c AtomicIsize,
}

/********** impl inherent *************************************************************************/

impl<'c> AtomicCounting<'c> {
    /// Creates a new [`AtomicCounting`] strategy holding `collisions`.
    #[inline]
    pub fn new(collisions: &'c AtomicIsize) -> Self {
        Self { collisions }
    }

    /// Returns the held collision counter.
    #[inline]
    pub fn collisions(&self) -> &'c AtomicIsize {
        self.collisions
    }
}

/********** impl IncrementStrategy ****************************************************************/

impl IncrementStrategy for AtomicCounting<'_> {
    const NAME: &'static str = "atomic";

    #[inline(always)]
    fn increment(&self, slot: &AtomicIsize) {
        Atomic.increment(slot);
    }
}
