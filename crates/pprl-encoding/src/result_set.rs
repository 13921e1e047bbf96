//! Result-set encoding orchestration.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rayon::prelude::*;
use shared_crypto::SecretKey;
use shared_types::{ResultSet, Row, RowElement};
use tracing::{debug, warn};

use pprl_bloom_filters::{BigramHasher, RecordBloomFilterGenerator};

use crate::error::EncodingError;
use crate::idat::IdatEncoder;
use crate::mdat::MdatEncoder;
use crate::ports::MasterPatientIndexClient;

/// One encoded output row bound for the trusted third party.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedRow {
    /// Site-local record identifier, kept queryable in cleartext
    pub ehr_id: String,
    /// Medic-local id, encrypted under the organization key
    pub encrypted_medic_id: String,
    /// Base64 record Bloom filter bytes
    pub record_bloom_filter: String,
    /// Encrypted MDAT cells, identifier excluded
    pub encrypted_mdat: Row,
    /// Encrypted IDAT container, when configured
    pub encrypted_idat: Option<String>,
}

/// Per-row encoding pipeline: MPI lookup → record Bloom filter → MDAT
/// encryption → output row assembly.
///
/// Rows are independent and processed on rayon's pool; the only blocking
/// step is the MPI lookup, which belongs to the collaborator behind
/// [`MasterPatientIndexClient`]. The encoder never drops rows: each
/// input row yields either an [`EncodedRow`] or its own
/// [`EncodingError`], in input order.
pub struct ResultSetEncoder<H: BigramHasher, M: MasterPatientIndexClient> {
    bloom_generator: RecordBloomFilterGenerator<H>,
    mpi_client: Arc<M>,
    organization_identifier: String,
    organization_key: SecretKey,
    idat_encoder: IdatEncoder,
    mdat_encoder: MdatEncoder,
    include_encrypted_idat: bool,
}

impl<H, M> ResultSetEncoder<H, M>
where
    H: BigramHasher,
    M: MasterPatientIndexClient,
{
    /// Create an encoder for one organization and one research study.
    ///
    /// The medic-local id and the optional IDAT container are encrypted
    /// under the organization key with the organization identifier as
    /// AAD; MDAT cells are encrypted under the research-study key with
    /// the research-study identifier as AAD.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::EmptyContextTag` if either identifier is
    /// empty.
    pub fn new(
        bloom_generator: RecordBloomFilterGenerator<H>,
        mpi_client: Arc<M>,
        organization_identifier: &str,
        organization_key: SecretKey,
        research_study_identifier: &str,
        research_study_key: SecretKey,
        include_encrypted_idat: bool,
    ) -> Result<Self, EncodingError> {
        let idat_encoder =
            IdatEncoder::new(organization_key.clone(), organization_identifier)?;
        let mdat_encoder = MdatEncoder::new(research_study_key, research_study_identifier)?;

        Ok(Self {
            bloom_generator,
            mpi_client,
            organization_identifier: organization_identifier.to_owned(),
            organization_key,
            idat_encoder,
            mdat_encoder,
            include_encrypted_idat,
        })
    }

    /// Encode every row of the result set.
    ///
    /// `id_column_index` designates the record-identifier column. Output
    /// cardinality equals input cardinality; per-row failures are
    /// isolated (collect-and-continue) and returned in place.
    pub fn encode(
        &self,
        result_set: &ResultSet,
        id_column_index: usize,
    ) -> Vec<Result<EncodedRow, EncodingError>> {
        debug!(
            rows = result_set.rows.len(),
            id_column_index, "encoding result set"
        );

        let encoded: Vec<Result<EncodedRow, EncodingError>> = result_set
            .rows
            .par_iter()
            .enumerate()
            .map(|(row_index, row)| self.encode_row(row_index, row, id_column_index))
            .collect();

        let failed = encoded.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                failed,
                total = encoded.len(),
                "result set encoded with isolated row failures"
            );
        }

        encoded
    }

    fn encode_row(
        &self,
        row_index: usize,
        row: &[RowElement],
        id_column_index: usize,
    ) -> Result<EncodedRow, EncodingError> {
        let identifier = row
            .get(id_column_index)
            .ok_or(EncodingError::MissingIdentifier {
                row: row_index,
                column: id_column_index,
            })?;
        let ehr_id = match identifier {
            RowElement::String(value) if !value.is_empty() => value,
            RowElement::String(_) => {
                return Err(EncodingError::MissingIdentifier {
                    row: row_index,
                    column: id_column_index,
                })
            }
            _ => {
                return Err(EncodingError::IdentifierNotString {
                    row: row_index,
                    column: id_column_index,
                })
            }
        };

        let idat = self.mpi_client.fetch_idat(ehr_id)?;

        let record_bloom_filter = self.bloom_generator.generate(&idat)?;
        let encrypted_medic_id = self.encrypt_medic_id(&idat.medic_id)?;
        let encrypted_mdat = self.mdat_encoder.encrypt_row(row, id_column_index)?;
        let encrypted_idat = if self.include_encrypted_idat {
            Some(self.idat_encoder.encode(&idat)?)
        } else {
            None
        };

        Ok(EncodedRow {
            ehr_id: ehr_id.clone(),
            encrypted_medic_id,
            record_bloom_filter: BASE64.encode(record_bloom_filter.to_bytes()),
            encrypted_mdat,
            encrypted_idat,
        })
    }

    fn encrypt_medic_id(&self, medic_id: &str) -> Result<String, EncodingError> {
        let blob = shared_crypto::encrypt(
            medic_id.as_bytes(),
            self.organization_identifier.as_bytes(),
            &self.organization_key,
        )?;
        Ok(BASE64.encode(blob))
    }

    /// Decrypt a medic-local id encrypted by this organization.
    pub fn decrypt_medic_id(&self, encrypted: &str) -> Result<String, EncodingError> {
        let blob = BASE64.decode(encrypted)?;
        let plain = shared_crypto::decrypt(
            &blob,
            self.organization_identifier.as_bytes(),
            &self.organization_key,
        )?;
        String::from_utf8(plain).map_err(|_| EncodingError::MalformedMedicId)
    }
}
