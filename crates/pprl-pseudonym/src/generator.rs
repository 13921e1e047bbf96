//! Pseudonym issuing for matched persons.

use rand::seq::SliceRandom;
use rayon::prelude::*;
use shared_crypto::SecretKey;
use shared_types::MedicId;
use tracing::debug;

use crate::error::PseudonymError;
use crate::linkage::{MatchedPerson, Person, PseudonymizedPerson};
use crate::wire::{measure, pad_and_encrypt};

/// Issues pseudonyms for clusters of linked `MedicId`s.
///
/// `F` builds the caller's typed result from a matched person and its
/// encoded pseudonym, mirroring the factory boundary of the linkage
/// collaborator.
pub struct PseudonymGenerator<F> {
    aad: Vec<u8>,
    key: SecretKey,
    factory: F,
}

impl<F> PseudonymGenerator<F> {
    /// Create a generator bound to a research study, its TTP key, and a
    /// result factory.
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

    /// Issue a pseudonym for every matched person and shuffle the
    /// output.
    ///
    /// Four phases, in order: parallel serialize-and-measure, batch-wide
    /// maximum (the mandatory synchronization point), parallel
    /// pad-and-encrypt with a fresh nonce per item, uniform shuffle.
    /// Collapsing these into one streaming pass would break the padding
    /// invariant, since the maximum is unknown until every item has been
    /// measured.
    pub fn create_pseudonyms_and_shuffle<P, M, PP>(
        &self,
        persons: &[M],
    ) -> Result<Vec<PP>, PseudonymError>
    where
        P: Person + Sync,
        M: MatchedPerson<P> + Sync,
        PP: PseudonymizedPerson + Send,
        F: Fn(&M, String) -> PP + Sync,
    {
        if persons.is_empty() {
            return Ok(Vec::new());
        }
        debug!(count = persons.len(), "issuing pseudonym batch");

        // Phase 1: serialize and measure, per person.
        let measured: Vec<(Vec<MedicId>, usize)> = persons
            .par_iter()
            .map(|person| {
                let medic_ids: Vec<MedicId> = person
                    .matches()
                    .iter()
                    .map(|record| record.medic_id().clone())
                    .collect();
                let length = measure(&medic_ids)?;
                Ok((medic_ids, length))
            })
            .collect::<Result<_, PseudonymError>>()?;

        // Phase 2: batch-wide reduction.
        let max_length = measured
            .iter()
            .map(|(_, length)| *length)
            .max()
            .unwrap_or(0);

        // Phase 3: pad, encrypt, and build the typed result, per person.
        let mut pseudonymized: Vec<PP> = persons
            .par_iter()
            .zip(measured)
            .map(|(person, (medic_ids, own_length))| {
                let encoded =
                    pad_and_encrypt(medic_ids, own_length, max_length, &self.aad, &self.key)?;
                Ok((self.factory)(person, encoded))
            })
            .collect::<Result<_, PseudonymError>>()?;

        // Phase 4: output position must carry no information.
        pseudonymized.shuffle(&mut rand::thread_rng());

        Ok(pseudonymized)
    }
}
