//! Pseudonym decoding back to matched persons.

use rayon::prelude::*;
use shared_crypto::SecretKey;
use shared_types::MedicId;
use tracing::warn;

use crate::error::PseudonymError;
use crate::linkage::PseudonymizedPerson;

/// Decodes issued pseudonyms back into the caller's matched-person type.
///
/// `F` is the matched-person factory: it receives the original
/// pseudonymized record plus the recovered `MedicId` list. Decoding has
/// no batch-wide state, unlike encoding, so items run in parallel and
/// an authentication failure aborts only the affected record.
pub struct PseudonymDecoder<F> {
    aad: Vec<u8>,
    key: SecretKey,
    factory: F,
}

impl<F> PseudonymDecoder<F> {
    /// Create a decoder bound to a research study, its TTP key, and a
    /// matched-person factory.
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::EmptyStudyIdentifier` for an empty
    /// identifier.
    pub fn new(
        research_study_identifier: &str,
        research_study_key: SecretKey,
        factory: F,
    ) -> Result<Self, PseudonymError> {
        if research_study_identifier.is_empty() {
            return Err(PseudonymError::EmptyStudyIdentifier);
        }
        Ok(Self {
            aad: research_study_identifier.as_bytes().to_vec(),
            key: research_study_key,
            factory,
        })
    }

    /// Decode one pseudonymized person.
    pub fn decode_pseudonym<PP, M>(&self, person: &PP) -> Result<M, PseudonymError>
    where
        PP: PseudonymizedPerson,
        F: Fn(&PP, Vec<MedicId>) -> M,
    {
        let medic_ids =
            crate::wire::decrypt_medic_ids(person.pseudonym(), &self.aad, &self.key)?;
        Ok((self.factory)(person, medic_ids))
    }

    /// Decode a batch; failures are isolated per item.
    pub fn decode_pseudonyms<PP, M>(&self, persons: &[PP]) -> Vec<Result<M, PseudonymError>>
    where
        PP: PseudonymizedPerson + Sync,
        M: Send,
        F: Fn(&PP, Vec<MedicId>) -> M + Sync,
    {
        let decoded: Vec<Result<M, PseudonymError>> = persons
            .par_iter()
            .map(|person| self.decode_pseudonym(person))
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
