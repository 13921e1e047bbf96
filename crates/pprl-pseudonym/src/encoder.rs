//! Raw pseudonym codec without the matched-person wrapper.

use rayon::prelude::*;
use shared_crypto::SecretKey;
use shared_types::Pseudonym;
use tracing::{debug, warn};

use crate::error::PseudonymError;
use crate::wire::{decrypt_medic_ids, measure, pad_and_encrypt};

/// `Pseudonym ⇄ ciphertext` round trips, e.g. for re-issuing pseudonyms
/// under a new research-study key.
///
/// Encoding applies the batch-padding contract: serialize and measure in
/// parallel, reduce to the batch maximum (the one mandatory
/// synchronization point), then pad and encrypt in parallel. There is no
/// output shuffle here; callers that need positional unlinkability use
/// [`crate::PseudonymGenerator`].
pub struct PseudonymEncoder {
    aad: Vec<u8>,
    key: SecretKey,
}

impl PseudonymEncoder {
    /// Create an encoder bound to a research study and its TTP key.
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::EmptyStudyIdentifier` for an empty
    /// identifier.
    pub fn new(
        research_study_identifier: &str,
        research_study_key: SecretKey,
    ) -> Result<Self, PseudonymError> {
        if research_study_identifier.is_empty() {
            return Err(PseudonymError::EmptyStudyIdentifier);
        }
        Ok(Self {
            aad: research_study_identifier.as_bytes().to_vec(),
            key: research_study_key,
        })
    }

    /// Encode a batch of pseudonyms with uniform plaintext padding.
    ///
    /// Output order matches input order.
    pub fn encode_pseudonyms(
        &self,
        pseudonyms: &[Pseudonym],
    ) -> Result<Vec<String>, PseudonymError> {
        if pseudonyms.is_empty() {
            return Ok(Vec::new());
        }
        debug!(count = pseudonyms.len(), "encoding pseudonym batch");

        // Phase 1: serialize and measure, per item.
        let lengths: Vec<usize> = pseudonyms
            .par_iter()
            .map(|pseudonym| measure(&pseudonym.medic_ids))
            .collect::<Result<_, _>>()?;

        // Phase 2: batch-wide reduction; cannot be computed per item.
        let max_length = lengths.iter().copied().max().unwrap_or(0);

        // Phase 3: pad to the batch maximum and encrypt, per item.
        pseudonyms
            .par_iter()
            .zip(lengths)
            .map(|(pseudonym, own_length)| {
                pad_and_encrypt(
                    pseudonym.medic_ids.clone(),
                    own_length,
                    max_length,
                    &self.aad,
                    &self.key,
                )
            })
            .collect()
    }

    /// Decode one encoded pseudonym.
    pub fn decode_pseudonym(&self, encoded: &str) -> Result<Pseudonym, PseudonymError> {
        decrypt_medic_ids(encoded, &self.aad, &self.key).map(Pseudonym::new)
    }

    /// Decode a batch; items are independent and failures are isolated
    /// per item.
    pub fn decode_pseudonyms(
        &self,
        encoded: &[String],
    ) -> Vec<Result<Pseudonym, PseudonymError>> {
        let decoded: Vec<Result<Pseudonym, PseudonymError>> = encoded
            .par_iter()
            .map(|item| self.decode_pseudonym(item))
            .collect();

        let failed = decoded.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                failed,
                total = decoded.len(),
                "pseudonym batch decoded with isolated failures"
            );
        }

        decoded
    }
}
