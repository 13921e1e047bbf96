//! Site-side export flow: result set in, encoded rows out.
//!
//! Covers the IDAT container round trip with tamper detection, MDAT
//! row encryption with the identifier excluded, and full result-set
//! encoding against the stub MPI.

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use base64::engine::general_purpose::STANDARD as BASE64;
#[cfg(test)]
use base64::Engine as _;

#[cfg(test)]
use pprl_bloom_filters::{
    HmacMd5Sha1BigramHasher, RecordBloomFilterGenerator, HMAC_KEY_LENGTH,
};
#[cfg(test)]
use pprl_encoding::{
    EncodingError, IdatEncoder, LookupError, MdatEncoder, ResultSetEncoder,
};
#[cfg(test)]
use shared_crypto::{CryptoError, SecretKey};
#[cfg(test)]
use shared_types::{Column, Idat, ResultSet, Row, RowElement};

#[cfg(test)]
use crate::support::StubMasterPatientIndexClient;

#[cfg(test)]
fn fixed_key() -> SecretKey {
    SecretKey::from_bytes([0x42; 32])
}

#[cfg(test)]
fn demo_idat() -> Idat {
    Idat {
        medic_id: "123A456B789C".into(),
        first_name: "Hans".into(),
        last_name: "Meier".into(),
        birthday: "140331414".into(),
        sex: "M".into(),
        street: "Seilbahnweg 147".into(),
        zip_code: "38518".into(),
        city: "Gifhorn".into(),
        country: "DE".into(),
        insurance_number: "A078179335".into(),
    }
}

#[cfg(test)]
fn site_encoder(
) -> ResultSetEncoder<HmacMd5Sha1BigramHasher, StubMasterPatientIndexClient> {
    let hasher =
        HmacMd5Sha1BigramHasher::new(&[0x11; HMAC_KEY_LENGTH], &[0x22; HMAC_KEY_LENGTH])
            .unwrap();
    let generator = RecordBloomFilterGenerator::with_defaults(42, hasher).unwrap();

    ResultSetEncoder::new(
        generator,
        Arc::new(StubMasterPatientIndexClient::new()),
        "org1",
        SecretKey::from_bytes([0x01; 32]),
        "researchStudy1",
        SecretKey::from_bytes([0x02; 32]),
        true,
    )
    .unwrap()
}

#[cfg(test)]
fn five_column_result_set(ehr_ids: &[&str]) -> ResultSet {
    let rows: Vec<Row> = ehr_ids
        .iter()
        .map(|ehr_id| {
            vec![
                RowElement::String("I10".into()),
                RowElement::Integer(140),
                RowElement::Double(36.6),
                RowElement::Timestamp("2020-02-15T12:30:00+01:00".into()),
                RowElement::String((*ehr_id).to_owned()),
            ]
        })
        .collect();

    ResultSet::new(
        vec![
            Column::new("diagnosis", "/items[0]"),
            Column::new("systolic", "/items[1]"),
            Column::new("temperature", "/items[2]"),
            Column::new("observed", "/items[3]"),
            Column::new("ehrid", "/ehr_id/value"),
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idat_container_round_trip_with_fixed_key() {
        let encoder = IdatEncoder::new(fixed_key(), "aadTag").unwrap();
        let idat = demo_idat();

        let encoded = encoder.encode(&idat).unwrap();
        let decoded = encoder.decode(&encoded).unwrap();

        assert_eq!(decoded, idat);
    }

    #[test]
    fn test_idat_container_tamper_raises_crypto_error() {
        let encoder = IdatEncoder::new(fixed_key(), "aadTag").unwrap();

        let encoded = encoder.encode(&demo_idat()).unwrap();
        let mut blob = BASE64.decode(&encoded).unwrap();
        blob[30] ^= 0x01;

        let result = encoder.decode(&BASE64.encode(blob));

        assert!(matches!(
            result,
            Err(EncodingError::Crypto(CryptoError::DecryptionFailed))
        ));
    }

    // A 5-cell row with the identifier at index 4 yields a 4-cell
    // payload; re-inserting the identifier and decrypting yields the
    // original 5 cells, same order and string representation.
    #[test]
    fn test_five_cell_row_round_trip_with_identifier_at_index_four() {
        let encoder = MdatEncoder::new(fixed_key(), "researchStudy1").unwrap();
        let row = five_column_result_set(&["5"]).rows.remove(0);

        let mut encrypted = encoder.encrypt_row(&row, 4).unwrap();
        assert_eq!(encrypted.len(), 4);

        encrypted.insert(4, row[4].clone());
        let decrypted = encoder.decrypt_row(&encrypted, 4).unwrap();

        assert_eq!(decrypted.len(), 5);
        assert_eq!(decrypted, row);
        for (original, restored) in row.iter().zip(&decrypted) {
            assert_eq!(original.value_as_string(), restored.value_as_string());
        }
    }

    #[test]
    fn test_result_set_encoding_preserves_cardinality() {
        crate::support::init_tracing();
        let encoder = site_encoder();
        let result_set = five_column_result_set(&["0", "1", "2", "3"]);

        let encoded = encoder.encode(&result_set, 4);

        assert_eq!(encoded.len(), 4);
        assert!(encoded.iter().all(|row| row.is_ok()));
    }

    #[test]
    fn test_encoded_rows_carry_filter_medic_id_and_idat() {
        let encoder = site_encoder();
        let result_set = five_column_result_set(&["6"]);

        let encoded = encoder.encode(&result_set, 4);
        let row = encoded[0].as_ref().unwrap();

        assert_eq!(row.ehr_id, "6");
        assert_eq!(row.encrypted_mdat.len(), 4);
        // Default configuration: 3550 filter bits, 444 raw bytes.
        let filter_bytes = BASE64.decode(&row.record_bloom_filter).unwrap();
        assert_eq!(filter_bytes.len(), 444);
        // Medic-local id decrypts under the organization context.
        assert_eq!(
            encoder.decrypt_medic_id(&row.encrypted_medic_id).unwrap(),
            "medicId-6"
        );
        // IDAT container present and opaque.
        let container = row.encrypted_idat.as_ref().unwrap();
        assert!(!container.contains("Peggy"));
    }

    #[test]
    fn test_unknown_record_fails_alone_and_batch_continues() {
        let encoder = site_encoder();
        let result_set = five_column_result_set(&["0", "no-such-record", "2"]);

        let encoded = encoder.encode(&result_set, 4);

        assert_eq!(encoded.len(), 3);
        assert!(encoded[0].is_ok());
        match &encoded[1] {
            Err(EncodingError::Lookup(LookupError::NotFound { ehr_id })) => {
                assert_eq!(ehr_id, "no-such-record");
            }
            other => panic!("expected lookup miss, got {other:?}"),
        }
        assert!(encoded[2].is_ok());
    }

    #[test]
    fn test_same_patient_yields_identical_filters_across_rows() {
        let encoder = site_encoder();
        let result_set = five_column_result_set(&["4", "4"]);

        let encoded = encoder.encode(&result_set, 4);

        let filter_a = &encoded[0].as_ref().unwrap().record_bloom_filter;
        let filter_b = &encoded[1].as_ref().unwrap().record_bloom_filter;
        assert_eq!(filter_a, filter_b);
    }

    #[test]
    fn test_error_messages_reference_identifiers_not_payload() {
        let encoder = site_encoder();
        let result_set = five_column_result_set(&["no-such-record"]);

        let encoded = encoder.encode(&result_set, 4);
        let message = format!("{}", encoded[0].as_ref().unwrap_err());

        assert!(message.contains("no-such-record"));
        assert!(!message.contains("I10"));
        assert!(!message.contains("140"));
    }
}
