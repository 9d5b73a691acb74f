//! Random selection of the buffer slots each trial increments.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns the number of bits a value drawn from `[0, cardinality)` is shifted
/// left to land on one of `cardinality` equally spaced slots in `[0, size)`.
///
/// This is `floor(log2(size / cardinality))`.
/// The result is only meaningful if both values are powers of two and
/// `cardinality <= size`; otherwise the resulting indices are misaligned or
/// out of bounds.
#[inline]
pub fn shift(size: usize, cardinality: usize) -> u32 {
    // negative results (cardinality > size) saturate to 0
    (size as f64 / cardinality as f64).log2().floor() as u32
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Targets
////////////////////////////////////////////////////////////////////////////////////////////////////

/// An endless source of pseudo-random target indices.
///
/// Every index is a uniformly distributed value in `[0, cardinality)` shifted
/// left by [`shift(size, cardinality)`][shift], so there are exactly
/// `cardinality` distinct indices, each a multiple of `2^shift`.
#[derive(Clone, Debug)]
pub struct Targets<R> {
    rng: R,
    distribution: Uniform<usize>,
    shift: u32,
}

/********** impl inherent *************************************************************************/

impl<R: Rng> Targets<R> {
    /// Creates a new [`Targets`] drawing its indices from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `cardinality` is 0.
    #[inline]
    pub fn new(rng: R, size: usize, cardinality: usize) -> Self {
        Self { rng, distribution: Uniform::new(0, cardinality), shift: shift(size, cardinality) }
    }

    /// Returns the next target index.
    #[inline(always)]
    pub fn next_index(&mut self) -> usize {
        self.distribution.sample(&mut self.rng) << self.shift
    }

    /// Returns the shift applied to every drawn value.
    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }
}

impl Targets<StdRng> {
    /// Creates a new [`Targets`] with a generator seeded from the operating
    /// system's entropy source.
    ///
    /// # Panics
    ///
    /// Panics if `cardinality` is 0.
    #[inline]
    pub fn from_entropy(size: usize, cardinality: usize) -> Self {
        Self::new(StdRng::from_entropy(), size, cardinality)
    }

    /// Creates a new [`Targets`] with a generator seeded from `seed`.
    ///
    /// Two instances created from the same parameters yield the same indices.
    ///
    /// # Panics
    ///
    /// Panics if `cardinality` is 0.
    #[inline]
    pub fn seeded(seed: u64, size: usize, cardinality: usize) -> Self {
        Self::new(StdRng::seed_from_u64(seed), size, cardinality)
    }
}

/********** impl Iterator *************************************************************************/

impl<R: Rng> Iterator for Targets<R> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_index())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
