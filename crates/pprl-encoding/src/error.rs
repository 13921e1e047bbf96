//! Error types for site-side encoding.

use shared_crypto::CryptoError;
use shared_types::RowElementError;
use thiserror::Error;

/// Master patient index lookup failures.
///
/// A miss is distinguished from a client failure so the caller can
/// decide what is retryable. Messages reference record identifiers,
/// never identifying data.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no IDAT found for record {ehr_id}")]
    NotFound { ehr_id: String },

    #[error("master patient index client failed for record {ehr_id}: {message}")]
    ClientFailure { ehr_id: String, message: String },
}

/// Failures while encoding or decoding result-set content.
///
/// Row-level variants name the offending row and column by index;
/// payload content never appears in an error.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("context tag must not be empty")]
    EmptyContextTag,

    #[error("row {row} has no cell at identifier column {column}")]
    MissingIdentifier { row: usize, column: usize },

    #[error("row {row} identifier at column {column} is not a string cell")]
    IdentifierNotString { row: usize, column: usize },

    #[error("identifier column {column} out of bounds for row of width {width}")]
    IdentifierOutOfBounds { column: usize, width: usize },

    #[error("encrypted cell at column {column} is not a string cell")]
    EncryptedCellNotString { column: usize },

    #[error("encrypted cell at column {column} has no type tag")]
    MissingTypeTag { column: usize },

    #[error("decrypted cell at column {column} is not valid tagged text")]
    MalformedCellPlaintext { column: usize },

    #[error("decrypted medic id is not valid UTF-8 text")]
    MalformedMedicId,

    #[error("invalid base64 ciphertext")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Configuration(#[from] pprl_bloom_filters::ConfigurationError),

    #[error(transparent)]
    Element(#[from] RowElementError),

    #[error("container serialization failed")]
    Serialization(#[from] serde_json::Error),
}
