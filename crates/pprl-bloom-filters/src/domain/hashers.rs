//! Keyed bigram hashing.
//!
//! Two independent keyed hash functions per hasher (double hashing):
//! bit positions are derived as `(h1 + i * h2) mod field_length` for
//! hash iteration `i`. Keyed HMACs prevent dictionary attacks against
//! the filter bits by parties that do not hold the hash keys.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use sha3::Sha3_256;

use crate::domain::config::HMAC_KEY_LENGTH;
use crate::error::ConfigurationError;

/// Two independent keyed hash functions over a single bigram.
///
/// Implementations must be deterministic: identical keys and input
/// always produce identical output.
pub trait BigramHasher: Send + Sync {
    /// First hash of the double-hashing scheme.
    fn first_hash(&self, bigram: &[u8]) -> u64;

    /// Second hash of the double-hashing scheme, independent of the first.
    fn second_hash(&self, bigram: &[u8]) -> u64;
}

/// Default hasher pair: HMAC-MD5 and HMAC-SHA1 with 64-byte keys.
///
/// MD5 and SHA-1 are used as PRFs inside HMAC here, not for collision
/// resistance; the filter is probabilistic by design.
#[derive(Clone)]
pub struct HmacMd5Sha1BigramHasher {
    first: Hmac<Md5>,
    second: Hmac<Sha1>,
}

impl HmacMd5Sha1BigramHasher {
    /// Create a hasher from two independent 64-byte keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidKeyLength` unless both keys
    /// are exactly 64 bytes.
    pub fn new(key1: &[u8], key2: &[u8]) -> Result<Self, ConfigurationError> {
        check_key_length(key1)?;
        check_key_length(key2)?;

        let first = Hmac::<Md5>::new_from_slice(key1).map_err(|_| {
            ConfigurationError::InvalidKeyLength {
                expected: HMAC_KEY_LENGTH,
                actual: key1.len(),
            }
        })?;
        let second = Hmac::<Sha1>::new_from_slice(key2).map_err(|_| {
            ConfigurationError::InvalidKeyLength {
                expected: HMAC_KEY_LENGTH,
                actual: key2.len(),
            }
        })?;

        Ok(Self { first, second })
    }
}

impl BigramHasher for HmacMd5Sha1BigramHasher {
    fn first_hash(&self, bigram: &[u8]) -> u64 {
        let mut mac = self.first.clone();
        mac.update(bigram);
        fold_digest(&mac.finalize().into_bytes())
    }

    fn second_hash(&self, bigram: &[u8]) -> u64 {
        let mut mac = self.second.clone();
        mac.update(bigram);
        fold_digest(&mac.finalize().into_bytes())
    }
}

/// Alternate hasher pair: HMAC-SHA256 and HMAC-SHA3-256 with 64-byte keys.
#[derive(Clone)]
pub struct HmacSha2Sha3BigramHasher {
    first: Hmac<Sha256>,
    second: Hmac<Sha3_256>,
}

impl HmacSha2Sha3BigramHasher {
    /// Create a hasher from two independent 64-byte keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidKeyLength` unless both keys
    /// are exactly 64 bytes.
    pub fn new(key1: &[u8], key2: &[u8]) -> Result<Self, ConfigurationError> {
        check_key_length(key1)?;
        check_key_length(key2)?;

        let first = Hmac::<Sha256>::new_from_slice(key1).map_err(|_| {
            ConfigurationError::InvalidKeyLength {
                expected: HMAC_KEY_LENGTH,
                actual: key1.len(),
            }
        })?;
        let second = Hmac::<Sha3_256>::new_from_slice(key2).map_err(|_| {
            ConfigurationError::InvalidKeyLength {
                expected: HMAC_KEY_LENGTH,
                actual: key2.len(),
            }
        })?;

        Ok(Self { first, second })
    }
}

impl BigramHasher for HmacSha2Sha3BigramHasher {
    fn first_hash(&self, bigram: &[u8]) -> u64 {
        let mut mac = self.first.clone();
        mac.update(bigram);
        fold_digest(&mac.finalize().into_bytes())
    }

    fn second_hash(&self, bigram: &[u8]) -> u64 {
        let mut mac = self.second.clone();
        mac.update(bigram);
        fold_digest(&mac.finalize().into_bytes())
    }
}

fn check_key_length(key: &[u8]) -> Result<(), ConfigurationError> {
    if key.len() != HMAC_KEY_LENGTH {
        return Err(ConfigurationError::InvalidKeyLength {
            expected: HMAC_KEY_LENGTH,
            actual: key.len(),
        });
    }
    Ok(())
}

/// Fold a MAC digest into a position basis.
///
/// Every supported digest is at least 8 bytes; the leading 8 bytes are
/// interpreted big-endian.
fn fold_digest(digest: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(buf)
}

/// Overlapping 2-character bigrams of a normalized field value.
///
/// Normalization: trim, lowercase, then wrap in single leading/trailing
/// spaces so the first and last characters form boundary bigrams. Empty
/// or whitespace-only values yield no bigrams at all.
pub(crate) fn to_bigrams(value: &str) -> Vec<Vec<u8>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let padded = format!(" {} ", trimmed.to_lowercase());
    let chars: Vec<char> = padded.chars().collect();

    chars
        .windows(2)
        .map(|pair| {
            let mut bigram = String::with_capacity(8);
            bigram.push(pair[0]);
            bigram.push(pair[1]);
            bigram.into_bytes()
        })
        .collect()
}
