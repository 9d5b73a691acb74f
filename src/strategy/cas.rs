use core::sync::atomic::AtomicIsize;

use crate::sanitize;
use crate::strategy::IncrementStrategy;

////////////////////////////////////////////////////////////////////////////////////////////////////
// CasSafe
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Increments with a compare-and-swap that is retried until it succeeds.
///
/// Every failed attempt means another writer has changed the slot between the
/// read and the swap and is counted as one collision.
/// There is no backoff and no upper bound on the number of retries.
#[derive(Copy, Clone, Debug)]
pub struct CasSafe<'c> {
    collisions: &'c AtomicIsize,
}

/********** impl inherent *************************************************************************/

impl<'c> CasSafe<'c> {
    /// Creates a new [`CasSafe`] strategy counting its collisions in
    /// `collisions`.
    ///
    /// The counter is only ever incremented, never reset.
    #[inline]
    pub fn new(collisions: &'c AtomicIsize) -> Self {
        Self { collisions }
    }

    /// Returns the collision counter.
    #[inline]
    pub fn collisions(&self) -> &'c AtomicIsize {
        self.collisions
    }
}

/********** impl IncrementStrategy ****************************************************************/

impl IncrementStrategy for CasSafe<'_> {
    const NAME: &'static str = "cassafe";

    #[inline(always)]
    fn increment(&self, slot: &AtomicIsize) {
        let mut curr = slot.load(sanitize::RELAXED_LOAD);
        // a failed swap yields the value another writer stored in between
        while let Err(actual) = slot.compare_exchange(
            curr,
            curr.wrapping_add(1),
            sanitize::CAS_SUCCESS,
            sanitize::CAS_FAIL,
        ) {
            curr = actual;
            self.collisions.fetch_add(1, sanitize::RELAXED_RMW);
        }
    }
}
