//! # Shared Types Crate
//!
//! Domain values used across the PPRL workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types (`Idat`, `MedicId`,
//!   `Pseudonym`, the result-set abstraction) are defined here.
//! - **No Cleartext Leaks**: identifying data never appears in `Debug`
//!   output; errors reference identifiers, not payload content.
//! - **In-Memory Only**: all values are created per encode/decode call
//!   and carry no persistence or caching behaviour.

pub mod errors;
pub mod idat;
pub mod identity;
pub mod result_set;

pub use errors::RowElementError;
pub use idat::Idat;
pub use identity::{MedicId, Pseudonym};
pub use result_set::{Column, ResultSet, Row, RowElement};
