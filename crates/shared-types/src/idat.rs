//! Identifying data (IDAT) container.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifying attributes of one patient record at one site.
///
/// Immutable value object; created per encode call and discarded after
/// ciphertext has been produced. Never persisted in cleartext.
///
/// `Debug` is redacted: IDAT must not leak into logs or error messages.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idat {
    /// Medic-local record identifier
    pub medic_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Birthday kept as-is; the format is owned by the master patient index
    pub birthday: String,
    pub sex: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub insurance_number: String,
}

impl Idat {
    /// Number of fields that participate in record Bloom filter matching
    /// (all fields except the medic-local identifier).
    pub const MATCHING_FIELD_COUNT: usize = 9;

    /// Matching field values in canonical order: first name, last name,
    /// birthday, sex, street, zip code, city, country, insurance number.
    pub fn matching_fields(&self) -> [&str; Self::MATCHING_FIELD_COUNT] {
        [
            &self.first_name,
            &self.last_name,
            &self.birthday,
            &self.sex,
            &self.street,
            &self.zip_code,
            &self.city,
            &self.country,
            &self.insurance_number,
        ]
    }
}

impl fmt::Debug for Idat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Idat").finish_non_exhaustive()
    }
}
