//! Composite record Bloom filter.

use bitvec::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::allocation::AllocationStrategy;
use crate::domain::field_filter::FieldBloomFilter;
use crate::error::ConfigurationError;

/// Record-level Bloom filter: all field regions composed into one
/// fixed-length bitset and permuted under the configuration's seed.
///
/// The permutation hides which composite positions belong to which
/// field, preventing attribute-position cryptanalysis at the TTP. The
/// same seed always yields the same permutation, so filters from one
/// configuration remain comparable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordBloomFilter {
    bits: BitVec<u8, Lsb0>,
}

impl RecordBloomFilter {
    /// Compose field filters into the permuted composite bitset.
    pub(crate) fn compose(
        fields: &[FieldBloomFilter],
        allocation: &dyn AllocationStrategy,
        permutation_seed: u64,
    ) -> Result<Self, ConfigurationError> {
        let field_lengths: Vec<usize> = fields.iter().map(FieldBloomFilter::len).collect();
        let total_length: usize = field_lengths.iter().sum();

        let maps = allocation.allocate(&field_lengths, total_length)?;

        let mut bits = bitvec![u8, Lsb0; 0; total_length];
        for (field, map) in fields.iter().zip(&maps) {
            for (local, &global) in map.iter().enumerate() {
                if field.bits()[local] {
                    bits.set(global, true);
                }
            }
        }

        permute(&mut bits, permutation_seed);

        Ok(Self { bits })
    }

    /// Filter length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// Raw filter bytes for text embedding; trailing padding bits of the
    /// last byte are zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.as_raw_slice().to_vec()
    }
}

/// Fisher-Yates shuffle of the bit positions, driven by a ChaCha20 RNG
/// seeded from the permutation seed. ChaCha20 output is stable across
/// platforms and releases, which keeps old filters comparable.
fn permute(bits: &mut BitSlice<u8, Lsb0>, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    for i in (1..bits.len()).rev() {
        let j = rng.gen_range(0..=i);
        bits.swap(i, j);
    }
}
