//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// Variants carry no payload or key material; a tag mismatch is reported
/// as a bare failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Encryption failed
    #[error("encryption failed")]
    EncryptionFailed,

    /// Authentication tag mismatch: tampered blob, wrong key, or wrong AAD
    #[error("decryption failed: authentication tag mismatch")]
    DecryptionFailed,

    /// Invalid key length
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Ciphertext blob shorter than IV plus tag
    #[error("ciphertext blob too short: {len} bytes, minimum {min}")]
    BlobTooShort {
        /// Actual blob length in bytes
        len: usize,
        /// Minimum blob length in bytes
        min: usize,
    },
}
