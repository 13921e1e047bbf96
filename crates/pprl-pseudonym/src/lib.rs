//! # PPRL Pseudonym
//!
//! TTP-side pseudonym handling: issuing opaque pseudonyms for clusters
//! of linked `MedicId`s and decoding them back into typed domain
//! results.
//!
//! ## Side-Channel Defenses
//!
//! - **Uniform padding**: within one batch every padded plaintext has
//!   the same byte length, so ciphertext length cannot reveal how many
//!   sites matched a person.
//! - **Shuffle**: the output list is uniformly permuted, so position
//!   carries no information about input order or match confidence.
//!
//! ## Components
//!
//! - `PseudonymGenerator`: `create_pseudonyms_and_shuffle` over matched
//!   persons, building typed results through a caller-supplied factory.
//! - `PseudonymDecoder`: per-item decode back to matched persons;
//!   failures are isolated per item.
//! - `PseudonymEncoder`: raw `Pseudonym ⇄ ciphertext` round trips (e.g.
//!   for re-issuing pseudonyms under a new key), same batch-padding
//!   contract on encode.
//! - `linkage`: traits marking the boundary to the external
//!   record-linkage algorithm.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod linkage;
pub mod wire;

pub use decoder::PseudonymDecoder;
pub use encoder::PseudonymEncoder;
pub use error::PseudonymError;
pub use generator::PseudonymGenerator;
pub use linkage::{MatchedPerson, Person, PseudonymizedPerson};
pub use wire::PseudonymWithPadding;
