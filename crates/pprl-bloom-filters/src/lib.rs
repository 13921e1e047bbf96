//! # PPRL Bloom Filters
//!
//! Record Bloom filter generation: the non-reversible, approximately
//! matchable representation of identifying data (IDAT) sent to the
//! trusted third party for record linkage.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure logic, no I/O
//!   - `BigramHasher`: two independent keyed hash functions over field
//!     bigrams (double hashing)
//!   - `BloomFilterGenerator`: per-field bitset generation
//!   - `AllocationStrategy`: pluggable placement of field regions inside
//!     the composite bitset (contiguous or interleaved)
//!   - `RecordBloomFilter`: composite bitset, permuted under a seed
//!   - `FieldWeights` / `FieldBloomFilterLengths`: per-field configuration
//!
//! - `RecordBloomFilterGenerator`: assembles the above into
//!   `generate(&Idat) -> RecordBloomFilter`
//!
//! ## Invariants
//!
//! - Identical (Idat, weights, lengths, seed, keys, allocation) inputs
//!   yield bit-identical composite filters.
//! - Null/empty field values contribute no bits; their region stays
//!   reserved and zero.
//! - The composite length is the sum of the configured field lengths and
//!   is fixed per configuration.
//!
//! ## Usage Example
//!
//! ```ignore
//! use pprl_bloom_filters::{HmacMd5Sha1BigramHasher, RecordBloomFilterGenerator};
//!
//! let hasher = HmacMd5Sha1BigramHasher::new(&key1, &key2)?;
//! let generator = RecordBloomFilterGenerator::with_defaults(permutation_seed, hasher)?;
//! let filter = generator.generate(&idat)?;
//! ```

pub mod domain;
pub mod error;
pub mod generator;

// Re-exports for convenience
pub use domain::{
    AllocationStrategy, BigramHasher, BloomFilterGenerator, ContiguousAllocation,
    FieldBloomFilter, FieldBloomFilterLengths, FieldWeights, HmacMd5Sha1BigramHasher,
    HmacSha2Sha3BigramHasher, InterleavedAllocation, RecordBloomFilter,
    HMAC_KEY_LENGTH, NUMBER_OF_HASH_FUNCTIONS,
};
pub use error::ConfigurationError;
pub use generator::RecordBloomFilterGenerator;
