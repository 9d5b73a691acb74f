//! Errors reported by the checked [`Workload`][crate::Workload] constructors.

use thiserror::Error;

/// A violated precondition of a benchmark run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum WorkloadError {
    /// The cardinality is zero, so there is no slot to draw from.
    #[error("cardinality must be at least 1")]
    ZeroCardinality,
    /// More distinct slots were requested than the buffer has.
    #[error("cardinality {cardinality} exceeds buffer size {size}")]
    CardinalityExceedsSize {
        /// The requested cardinality.
        cardinality: usize,
        /// The buffer size.
        size: usize,
    },
    /// Size or cardinality is not a power of two, which misaligns the shift.
    #[error("size {size} and cardinality {cardinality} must both be powers of two")]
    NotPowerOfTwo {
        /// The buffer size.
        size: usize,
        /// The requested cardinality.
        cardinality: usize,
    },
    /// The buffer has fewer slots than the workload addresses.
    #[error("buffer of length {len} is shorter than workload size {size}")]
    BufferTooShort {
        /// The actual buffer length.
        len: usize,
        /// The workload size.
        size: usize,
    },
}
