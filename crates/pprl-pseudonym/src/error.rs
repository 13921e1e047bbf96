//! Error types for pseudonym handling.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Failures while encoding or decoding pseudonyms.
///
/// A decode failure aborts only the record in progress; batch APIs
/// return per-item results.
#[derive(Debug, Error)]
pub enum PseudonymError {
    #[error("research study identifier must not be empty")]
    EmptyStudyIdentifier,

    #[error("invalid base64 pseudonym")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("pseudonym serialization failed")]
    Serialization(#[from] serde_json::Error),
}
