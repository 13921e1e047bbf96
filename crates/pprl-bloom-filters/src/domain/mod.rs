//! Domain layer: pure Bloom filter logic, no I/O.

pub mod allocation;
pub mod config;
pub mod field_filter;
pub mod hashers;
pub mod record_filter;

pub use allocation::{AllocationStrategy, ContiguousAllocation, InterleavedAllocation};
pub use config::{FieldBloomFilterLengths, FieldWeights, HMAC_KEY_LENGTH};
pub use field_filter::{BloomFilterGenerator, FieldBloomFilter, NUMBER_OF_HASH_FUNCTIONS};
pub use hashers::{BigramHasher, HmacMd5Sha1BigramHasher, HmacSha2Sha3BigramHasher};
pub use record_filter::RecordBloomFilter;
