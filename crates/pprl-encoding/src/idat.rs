//! IDAT container encoder.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use shared_crypto::SecretKey;
use shared_types::Idat;

use crate::error::EncodingError;

/// Encrypts and decrypts a whole [`Idat`] container as one unit.
///
/// The container is serialized to JSON, AEAD-encrypted under the
/// encoder's key with its context tag as AAD, and base64-encoded for
/// text embedding. Decoding reconstructs byte-identical field values.
pub struct IdatEncoder {
    key: SecretKey,
    aad: Vec<u8>,
}

impl IdatEncoder {
    /// Create an encoder bound to a key and a context tag (e.g. the
    /// organization identifier).
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::EmptyContextTag` for an empty tag; an
    /// empty AAD would silently drop the domain separation.
    pub fn new(key: SecretKey, context_tag: &str) -> Result<Self, EncodingError> {
        if context_tag.is_empty() {
            return Err(EncodingError::EmptyContextTag);
        }
        Ok(Self {
            key,
            aad: context_tag.as_bytes().to_vec(),
        })
    }

    /// Encrypt the container into an opaque base64 string.
    pub fn encode(&self, idat: &Idat) -> Result<String, EncodingError> {
        let plain = serde_json::to_vec(idat)?;
        let blob = shared_crypto::encrypt(&plain, &self.aad, &self.key)?;
        Ok(BASE64.encode(blob))
    }

    /// Decrypt a string produced by [`IdatEncoder::encode`].
    pub fn decode(&self, encoded: &str) -> Result<Idat, EncodingError> {
        let blob = BASE64.decode(encoded)?;
        let plain = shared_crypto::decrypt(&blob, &self.aad, &self.key)?;
        Ok(serde_json::from_slice(&plain)?)
    }
}
