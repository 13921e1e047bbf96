//! # AES-256-GCM Codec
//!
//! Authenticated encryption with caller-supplied key and AAD domain tag.
//!
//! ## Blob format
//!
//! ```text
//! iv (12 bytes) ∥ ciphertext ∥ tag (16 bytes)
//! ```
//!
//! The blob is self-describing: it can be split without external
//! metadata. The IV is generated inside [`encrypt`] from the OS RNG so
//! nonce reuse under a fixed key cannot be caused by a caller.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::{CryptoError, SecretKey};

/// GCM IV length in bytes.
pub const GCM_IV_LENGTH: usize = 12;

/// GCM authentication tag length in bytes.
pub const GCM_TAG_LENGTH: usize = 16;

/// Fixed per-blob overhead: IV plus authentication tag.
pub const ENCRYPTED_OVERHEAD: usize = GCM_IV_LENGTH + GCM_TAG_LENGTH;

/// Encrypt `plaintext` under `key`, binding it to the `aad` domain tag.
///
/// A fresh IV is drawn from the OS RNG per call and prepended to the
/// returned blob.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if the cipher rejects the
/// input.
pub fn encrypt(plaintext: &[u8], aad: &[u8], key: &SecretKey) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let mut iv = [0u8; GCM_IV_LENGTH];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&iv),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut blob = Vec::with_capacity(GCM_IV_LENGTH + ciphertext.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`] under the same key and AAD.
///
/// # Errors
///
/// - `CryptoError::BlobTooShort` if the blob cannot contain an IV and tag.
/// - `CryptoError::DecryptionFailed` on any bit flip, wrong key, or
///   wrong AAD (authentication tag mismatch).
pub fn decrypt(blob: &[u8], aad: &[u8], key: &SecretKey) -> Result<Vec<u8>, CryptoError> {
    if blob.len() < ENCRYPTED_OVERHEAD {
        return Err(CryptoError::BlobTooShort {
            len: blob.len(),
            min: ENCRYPTED_OVERHEAD,
        });
    }

    let (iv, ciphertext) = blob.split_at(GCM_IV_LENGTH);
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher
        .decrypt(
            Nonce::from_slice(iv),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| CryptoError::DecryptionFailed)
}
