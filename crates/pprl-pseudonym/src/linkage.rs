//! Boundary traits to the external record-linkage algorithm.
//!
//! The similarity metric and clustering that produce matched persons
//! are out of scope; this core only consumes their results through
//! these traits and hands decoded results back through caller-supplied
//! factory closures.

use shared_types::MedicId;

/// One site's view of a person, as produced by the linkage step.
pub trait Person {
    /// The site-local identity of this record.
    fn medic_id(&self) -> &MedicId;
}

/// A cluster of records linked to one identity across sites.
pub trait MatchedPerson<P: Person> {
    /// All matched records; order is preserved as given by the linkage
    /// step.
    fn matches(&self) -> &[P];
}

/// A person record carrying its issued pseudonym.
pub trait PseudonymizedPerson {
    /// The opaque base64 pseudonym string.
    fn pseudonym(&self) -> &str;
}
