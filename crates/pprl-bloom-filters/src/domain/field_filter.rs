//! Per-field Bloom filter generation.

use bitvec::prelude::*;

use crate::domain::hashers::{to_bigrams, BigramHasher};

/// Hash iterations per bigram. With double hashing, iteration `i` sets
/// bit `(h1 + i * h2) mod length`.
pub const NUMBER_OF_HASH_FUNCTIONS: usize = 15;

/// Generates the bitset for one field's allocated region.
pub struct BloomFilterGenerator<'a, H: BigramHasher> {
    length: usize,
    hasher: &'a H,
}

impl<'a, H: BigramHasher> BloomFilterGenerator<'a, H> {
    /// Create a generator for a field region of `length` bits.
    pub fn new(length: usize, hasher: &'a H) -> Self {
        Self { length, hasher }
    }

    /// Hash a normalized field value into the field-local bitset.
    ///
    /// Empty or whitespace-only values set no bits; the region stays
    /// zero but keeps its configured size.
    pub fn generate_bit_set(&self, value: &str) -> BitVec<u8, Lsb0> {
        let mut bits = bitvec![u8, Lsb0; 0; self.length];

        for bigram in to_bigrams(value) {
            let h1 = self.hasher.first_hash(&bigram) as u128;
            let h2 = self.hasher.second_hash(&bigram) as u128;

            for i in 0..NUMBER_OF_HASH_FUNCTIONS {
                let position = ((h1 + i as u128 * h2) % self.length as u128) as usize;
                bits.set(position, true);
            }
        }

        bits
    }
}

/// One field's bitset plus its matching weight.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBloomFilter {
    bits: BitVec<u8, Lsb0>,
    weight: f64,
}

impl FieldBloomFilter {
    pub fn new(bits: BitVec<u8, Lsb0>, weight: f64) -> Self {
        Self { bits, weight }
    }

    /// Region size in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Matching weight carried for the downstream linkage algorithm.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }
}
