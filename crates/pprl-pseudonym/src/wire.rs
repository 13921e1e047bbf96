//! Padded pseudonym wire format and the shared pad/encrypt helpers.
//!
//! Serialized form, with this exact field order:
//!
//! ```text
//! {"medicIds":[{"organization":…,"value":…}, …],"padding":"<n spaces>"}
//! ```
//!
//! Pad lengths are computed against the serialization with an *empty*
//! padding field, so after padding every plaintext in a batch is exactly
//! the batch maximum. The stable field order makes that accounting
//! reproducible.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use shared_crypto::SecretKey;
use shared_types::MedicId;

use crate::error::PseudonymError;

/// Wire-level pseudonym plaintext: the linked `MedicId`s plus the
/// length-equalizing padding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudonymWithPadding {
    #[serde(rename = "medicIds")]
    pub medic_ids: Vec<MedicId>,
    pub padding: String,
}

impl PseudonymWithPadding {
    /// Build with a padding string of exactly `padding_length` spaces.
    pub fn with_padding_length(medic_ids: Vec<MedicId>, padding_length: usize) -> Self {
        Self {
            medic_ids,
            padding: " ".repeat(padding_length),
        }
    }
}

/// Byte length of the serialization with an empty padding field.
///
/// This is the pre-padding measure used for the batch maximum; adding
/// `n` spaces of padding grows the serialization by exactly `n` bytes.
pub(crate) fn measure(medic_ids: &[MedicId]) -> Result<usize, PseudonymError> {
    let unpadded = PseudonymWithPadding {
        medic_ids: medic_ids.to_vec(),
        padding: String::new(),
    };
    Ok(serde_json::to_vec(&unpadded)?.len())
}

/// Pad to `max_length` bytes, encrypt under the study key with the study
/// AAD, and base64-encode.
pub(crate) fn pad_and_encrypt(
    medic_ids: Vec<MedicId>,
    own_length: usize,
    max_length: usize,
    aad: &[u8],
    key: &SecretKey,
) -> Result<String, PseudonymError> {
    let padded =
        PseudonymWithPadding::with_padding_length(medic_ids, max_length - own_length);
    let plain = serde_json::to_vec(&padded)?;
    debug_assert_eq!(plain.len(), max_length);

    let blob = shared_crypto::encrypt(&plain, aad, key)?;
    Ok(BASE64.encode(blob))
}

/// Base64-decode, decrypt, deserialize, and discard the padding.
pub(crate) fn decrypt_medic_ids(
    encoded: &str,
    aad: &[u8],
    key: &SecretKey,
) -> Result<Vec<MedicId>, PseudonymError> {
    let blob = BASE64.decode(encoded)?;
    let plain = shared_crypto::decrypt(&blob, aad, key)?;
    let padded: PseudonymWithPadding = serde_json::from_slice(&plain)?;
    Ok(padded.medic_ids)
}
