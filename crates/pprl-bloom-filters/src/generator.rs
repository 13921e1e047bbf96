//! Record Bloom filter generator: IDAT in, permuted composite out.

use shared_types::Idat;

use crate::domain::{
    AllocationStrategy, BigramHasher, BloomFilterGenerator, ContiguousAllocation,
    FieldBloomFilter, FieldBloomFilterLengths, FieldWeights, RecordBloomFilter,
};
use crate::error::ConfigurationError;

/// Turns an [`Idat`] into its [`RecordBloomFilter`].
///
/// Deterministic for a fixed configuration: identical IDAT, weights,
/// lengths, permutation seed, hash keys, and allocation strategy always
/// produce bit-identical filters. The generator holds no mutable state
/// and can be shared across worker threads.
pub struct RecordBloomFilterGenerator<H: BigramHasher> {
    permutation_seed: u64,
    weights: FieldWeights,
    lengths: FieldBloomFilterLengths,
    allocation: Box<dyn AllocationStrategy>,
    hasher: H,
}

impl<H: BigramHasher> RecordBloomFilterGenerator<H> {
    /// Create a generator with explicit weights and lengths, validating
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for zero-length field regions or
    /// non-finite/negative weights.
    pub fn new(
        permutation_seed: u64,
        weights: FieldWeights,
        lengths: FieldBloomFilterLengths,
        hasher: H,
    ) -> Result<Self, ConfigurationError> {
        weights.validate()?;
        lengths.validate()?;

        Ok(Self {
            permutation_seed,
            weights,
            lengths,
            allocation: Box::new(ContiguousAllocation),
            hasher,
        })
    }

    /// Create a generator with the default production weights and
    /// lengths.
    pub fn with_defaults(permutation_seed: u64, hasher: H) -> Result<Self, ConfigurationError> {
        Self::new(
            permutation_seed,
            FieldWeights::default(),
            FieldBloomFilterLengths::default(),
            hasher,
        )
    }

    /// Replace the default contiguous region layout.
    pub fn with_allocation(mut self, allocation: Box<dyn AllocationStrategy>) -> Self {
        self.allocation = allocation;
        self
    }

    /// Composite filter length in bits for this configuration.
    pub fn filter_length(&self) -> usize {
        self.lengths.total()
    }

    /// Generate the record Bloom filter for one IDAT container.
    ///
    /// Empty field values leave their region zero; the region itself is
    /// always reserved so the composite length never varies.
    pub fn generate(&self, idat: &Idat) -> Result<RecordBloomFilter, ConfigurationError> {
        let values = idat.matching_fields();
        let lengths = self.lengths.as_array();
        let weights = self.weights.as_array();

        let fields: Vec<FieldBloomFilter> = values
            .iter()
            .zip(lengths)
            .zip(weights)
            .map(|((value, length), weight)| {
                let generator = BloomFilterGenerator::new(length, &self.hasher);
                FieldBloomFilter::new(generator.generate_bit_set(value), weight)
            })
            .collect();

        RecordBloomFilter::compose(&fields, self.allocation.as_ref(), self.permutation_seed)
    }
}
