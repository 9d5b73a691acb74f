//! Types for describing the parameters of a single benchmark run.

use core::sync::atomic::AtomicIsize;

use crate::error::WorkloadError;
use crate::harness;
use crate::strategy::IncrementStrategy;
use crate::target::Targets;

const DEFAULT_SIZE: usize = 1024;
const DEFAULT_TRIALS: usize = 10_000;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Workload
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The parameters of a benchmark run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Workload {
    size: usize,
    trials: usize,
    cardinality: usize,
    seed: Option<u64>,
}

/********** impl Default **************************************************************************/

impl Default for Workload {
    #[inline]
    fn default() -> Self {
        WorkloadBuilder::new().build()
    }
}

/********** impl inherent *************************************************************************/

impl Workload {
    /// Creates a new [`Workload`] with the given parameters.
    ///
    /// The parameters are not validated, see [`checked`][Workload::checked]
    /// for a validating constructor.
    /// Runs of the returned workload seed their random number generator from
    /// the operating system's entropy source.
    #[inline]
    pub fn with_params(size: usize, trials: usize, cardinality: usize) -> Self {
        Self { size, trials, cardinality, seed: None }
    }

    /// Creates a new [`Workload`] with the given parameters, if they satisfy
    /// the preconditions of the benchmark.
    ///
    /// # Errors
    ///
    /// Fails, if `cardinality` is 0 or greater than `size` or if either of
    /// them is not a power of two.
    #[inline]
    pub fn checked(size: usize, trials: usize, cardinality: usize) -> Result<Self, WorkloadError> {
        let workload = Self::with_params(size, trials, cardinality);
        workload.validate()?;
        Ok(workload)
    }

    /// Returns the same workload, but with its random number generator seeded
    /// from `seed` instead of the operating system's entropy source.
    #[inline]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed: Some(seed), ..self }
    }

    /// Returns the addressable length of the target buffer.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of increments performed by a run.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the number of distinct slots the trials are spread across.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Returns the injected seed, if there is one.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks the preconditions on `size` and `cardinality`.
    ///
    /// # Errors
    ///
    /// Fails, if `cardinality` is 0 or greater than `size` or if either of
    /// them is not a power of two.
    pub fn validate(&self) -> Result<(), WorkloadError> {
        let (size, cardinality) = (self.size, self.cardinality);
        if cardinality == 0 {
            return Err(WorkloadError::ZeroCardinality);
        }

        if cardinality > size {
            return Err(WorkloadError::CardinalityExceedsSize { cardinality, size });
        }

        if !size.is_power_of_two() || !cardinality.is_power_of_two() {
            return Err(WorkloadError::NotPowerOfTwo { size, cardinality });
        }

        Ok(())
    }

    /// Checks whether `buffer` is large enough to hold every index a run of
    /// this workload can reach.
    ///
    /// # Errors
    ///
    /// Fails, if `buffer` is shorter than the workload's size.
    #[inline]
    pub fn check_buffer(&self, buffer: &[AtomicIsize]) -> Result<(), WorkloadError> {
        match buffer.len() {
            len if len < self.size => Err(WorkloadError::BufferTooShort { len, size: self.size }),
            _ => Ok(()),
        }
    }

    /// Runs the workload against `buffer` using the given increment `strategy`
    /// and returns the elapsed time of all trials in seconds.
    ///
    /// # Panics
    ///
    /// Panics if the cardinality is 0 or if a computed index is outside of
    /// `buffer`.
    #[inline]
    pub fn run<S: IncrementStrategy>(&self, buffer: &[AtomicIsize], strategy: &S) -> f64 {
        match self.seed {
            Some(seed) => {
                let targets = Targets::seeded(seed, self.size, self.cardinality);
                harness::run(buffer, self, targets, strategy)
            }
            None => {
                let targets = Targets::from_entropy(self.size, self.cardinality);
                harness::run(buffer, self, targets, strategy)
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// WorkloadBuilder
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A builder type for gradually initializing a [`Workload`].
///
/// Unset parameters default to a buffer of 1024 slots, 10 000 trials and a
/// cardinality equal to the size (i.e. no two trials are forced onto the same
/// slot).
#[derive(Copy, Clone, Debug, Default)]
pub struct WorkloadBuilder {
    size: Option<usize>,
    trials: Option<usize>,
    cardinality: Option<usize>,
    seed: Option<u64>,
}

impl WorkloadBuilder {
    /// Creates a new [`WorkloadBuilder`] with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the addressable length of the target buffer.
    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the number of increments.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the number of distinct slots the increments are spread across.
    #[inline]
    pub fn cardinality(mut self, cardinality: usize) -> Self {
        self.cardinality = Some(cardinality);
        self
    }

    /// Sets the seed for the random number generator.
    ///
    /// Without a seed, every run seeds its generator from the operating
    /// system's entropy source.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Consumes the [`WorkloadBuilder`] and returns an unchecked [`Workload`].
    ///
    /// Unspecified parameters are initialized with their default values.
    #[inline]
    pub fn build(self) -> Workload {
        let size = self.size.unwrap_or(DEFAULT_SIZE);
        Workload {
            size,
            trials: self.trials.unwrap_or(DEFAULT_TRIALS),
            cardinality: self.cardinality.unwrap_or(size),
            seed: self.seed,
        }
    }

    /// Consumes the [`WorkloadBuilder`] and returns a [`Workload`], if the
    /// resulting parameters are valid.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Workload::checked`].
    #[inline]
    pub fn try_build(self) -> Result<Workload, WorkloadError> {
        let workload = self.build();
        workload.validate()?;
        Ok(workload)
    }
}
