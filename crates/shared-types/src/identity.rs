//! Site-local record identities and their cross-site grouping.

use serde::{Deserialize, Serialize};

/// Identifies one site's record of a person: the site's organization
/// identifier plus the site-local record value.
///
/// Field order is part of the wire contract
/// (`{"organization":…,"value":…}`); pad-length accounting on the TTP
/// side depends on a stable serialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicId {
    pub organization: String,
    pub value: String,
}

impl MedicId {
    pub fn new(organization: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            value: value.into(),
        }
    }
}

/// All `MedicId`s that share one linked identity across sites.
///
/// The list order is preserved as given by the linkage step; it is
/// canonical for serialization but carries no semantic meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pseudonym {
    #[serde(rename = "medicIds")]
    pub medic_ids: Vec<MedicId>,
}

impl Pseudonym {
    pub fn new(medic_ids: Vec<MedicId>) -> Self {
        Self { medic_ids }
    }
}
