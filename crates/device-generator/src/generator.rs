//! Batch generator producing lazy sequences of device records.

use crate::synth::synthesize;
use device_core::{Convention, CoreError, DeviceRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Invalid argument or unknown schema
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Generates device records from an owned, seedable RNG.
///
/// All randomness for every record comes from this generator's RNG; records
/// drawn from two generators built with the same seed are identical except
/// for their timestamps.
pub struct DeviceGenerator {
    /// Random number generator shared by every record of this generator
    rng: StdRng,
    /// Seed, when the generator was built deterministically
    seed: Option<u64>,
    /// Number of records produced so far
    generated: u64,
}

impl DeviceGenerator {
    /// Create a new generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            generated: 0,
        }
    }

    /// Create a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            generated: 0,
        }
    }

    /// Create a generator from an optional seed, falling back to entropy.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this generator was built with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of records generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Synthesize the next device record.
    pub fn synthesize(&mut self, index_name: &str, convention: Convention) -> DeviceRecord {
        self.generated += 1;
        synthesize(&mut self.rng, index_name, convention)
    }

    /// Lazily generate `count` records routed to `index_name`.
    ///
    /// Returns `InvalidArgument` when `count` is negative. Each call returns a
    /// fresh iterator that continues drawing from this generator's RNG.
    pub fn records(
        &mut self,
        count: i64,
        index_name: &str,
        convention: Convention,
    ) -> Result<DeviceRecordIterator<'_>, GeneratorError> {
        let remaining = u64::try_from(count).map_err(|_| {
            CoreError::InvalidArgument(format!("record count must be non-negative, got {count}"))
        })?;

        tracing::debug!(
            "Generating {} records for index '{}' (schema={})",
            remaining,
            index_name,
            convention
        );

        Ok(DeviceRecordIterator {
            generator: self,
            index_name: index_name.to_string(),
            convention,
            remaining,
        })
    }

    /// Like [`Self::records`], with the convention given by schema name.
    pub fn records_for_schema(
        &mut self,
        count: i64,
        index_name: &str,
        schema: &str,
    ) -> Result<DeviceRecordIterator<'_>, GeneratorError> {
        let convention: Convention = schema.parse()?;
        self.records(count, index_name, convention)
    }
}

/// Iterator that lazily synthesizes device records.
pub struct DeviceRecordIterator<'a> {
    generator: &'a mut DeviceGenerator,
    index_name: String,
    convention: Convention,
    remaining: u64,
}

impl Iterator for DeviceRecordIterator<'_> {
    type Item = DeviceRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(
            self.generator
                .synthesize(&self.index_name, self.convention),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DeviceRecordIterator<'_> {}
