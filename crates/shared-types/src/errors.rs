//! Shared error types.

use thiserror::Error;

/// Failures when reconstructing a typed row element from its tagged
/// string serialization.
#[derive(Debug, Error)]
pub enum RowElementError {
    #[error("unknown row element type tag: {0}")]
    UnknownTypeTag(String),

    #[error("invalid integer cell value")]
    InvalidInteger(#[from] std::num::ParseIntError),

    #[error("invalid double cell value")]
    InvalidDouble(#[from] std::num::ParseFloatError),

    #[error("invalid json cell value")]
    InvalidJson(#[from] serde_json::Error),
}
