//! # PPRL Encoding
//!
//! Site-side encoders for the export pipeline: everything a data-holding
//! site runs to turn a query result set into the payload sent to the
//! trusted third party.
//!
//! ## Components
//!
//! - `IdatEncoder`: encrypts/decrypts the whole identifying-data
//!   container as one unit.
//! - `MdatEncoder`: encrypts/decrypts the clinical cells of a row,
//!   excluding the identifier cell.
//! - `ResultSetEncoder`: per-row orchestration: IDAT resolution through
//!   the master patient index, record Bloom filter generation, MDAT
//!   encryption, output row assembly.
//! - `MasterPatientIndexClient`: driven port to the external MPI.
//!
//! ## Error Isolation
//!
//! Row processing is collect-and-continue: a row that cannot be resolved
//! or encrypted yields its own error, the rest of the batch proceeds, and
//! output cardinality always equals input cardinality.

pub mod error;
pub mod idat;
pub mod mdat;
pub mod ports;
pub mod result_set;

pub use error::{EncodingError, LookupError};
pub use idat::IdatEncoder;
pub use mdat::MdatEncoder;
pub use ports::MasterPatientIndexClient;
pub use result_set::{EncodedRow, ResultSetEncoder};
