//! Error types for record Bloom filter generation.

use thiserror::Error;

/// Invalid generator configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("invalid hmac key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("field bloom filter length for {field} must be greater than zero")]
    EmptyFieldLength { field: &'static str },

    #[error("field weight for {field} must be finite and non-negative")]
    InvalidWeight { field: &'static str },

    #[error("allocation strategy produced {allocated} positions for a {expected}-bit composite")]
    AllocationMismatch { allocated: usize, expected: usize },
}
