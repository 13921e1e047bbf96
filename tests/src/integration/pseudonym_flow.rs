//! TTP-side flow: pseudonym issuing, padding and shuffle defenses,
//! decode back to matched persons.

#[cfg(test)]
use base64::engine::general_purpose::STANDARD as BASE64;
#[cfg(test)]
use base64::Engine as _;

#[cfg(test)]
use pprl_pseudonym::{
    PseudonymDecoder, PseudonymEncoder, PseudonymGenerator, PseudonymizedPerson,
};
#[cfg(test)]
use shared_crypto::{SecretKey, ENCRYPTED_OVERHEAD};
#[cfg(test)]
use shared_types::{MedicId, Pseudonym};

#[cfg(test)]
use crate::support::{TestMatchedPerson, TestPseudonymizedPerson};

#[cfg(test)]
fn study_key() -> SecretKey {
    SecretKey::from_bytes([0x42; 32])
}

#[cfg(test)]
fn generator(
) -> PseudonymGenerator<impl Fn(&TestMatchedPerson, String) -> TestPseudonymizedPerson> {
    PseudonymGenerator::new(
        "researchStudyIdentifier",
        study_key(),
        |_person: &TestMatchedPerson, pseudonym: String| TestPseudonymizedPerson { pseudonym },
    )
    .unwrap()
}

#[cfg(test)]
fn decoder(
) -> PseudonymDecoder<impl Fn(&TestPseudonymizedPerson, Vec<MedicId>) -> TestMatchedPerson> {
    PseudonymDecoder::new(
        "researchStudyIdentifier",
        study_key(),
        |_person: &TestPseudonymizedPerson, medic_ids: Vec<MedicId>| {
            TestMatchedPerson::new(
                medic_ids
                    .into_iter()
                    .map(crate::support::TestPerson::new)
                    .collect(),
            )
        },
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_decode_recovers_every_cluster() {
        crate::support::init_tracing();
        let persons = vec![
            TestMatchedPerson::of(&[("org1", "value11"), ("org2", "value21")]),
            TestMatchedPerson::of(&[("org1", "value12")]),
        ];

        let pseudonymized = generator().create_pseudonyms_and_shuffle(&persons).unwrap();
        assert_eq!(pseudonymized.len(), 2);

        let decoded = decoder().decode_pseudonyms(&pseudonymized);
        assert_eq!(decoded.len(), 2);

        let mut recovered: Vec<Vec<(String, String)>> = decoded
            .into_iter()
            .map(|result| {
                result
                    .unwrap()
                    .matches
                    .iter()
                    .map(|person| {
                        (
                            person.medic_id.organization.clone(),
                            person.medic_id.value.clone(),
                        )
                    })
                    .collect()
            })
            .collect();
        recovered.sort();

        assert_eq!(
            recovered,
            vec![
                vec![("org1".to_owned(), "value11".to_owned()), ("org2".to_owned(), "value21".to_owned())],
                vec![("org1".to_owned(), "value12".to_owned())],
            ]
        );
    }

    // Three clusters with differing serialized lengths; every padded
    // plaintext must be exactly the batch maximum before encryption.
    #[test]
    fn test_padded_plaintexts_match_the_batch_maximum_exactly() {
        let cluster = |organization: &str, value: &str| {
            Pseudonym::new(vec![MedicId::new(organization, value)])
        };

        let pseudonyms = vec![
            cluster("a", ""),
            cluster("org-one", "value-one"),
            cluster("org", "val"),
        ];

        let lengths: Vec<usize> = pseudonyms
            .iter()
            .map(|pseudonym| {
                serde_json::to_vec(&pprl_pseudonym::PseudonymWithPadding {
                    medic_ids: pseudonym.medic_ids.clone(),
                    padding: String::new(),
                })
                .unwrap()
                .len()
            })
            .collect();
        let max_length = *lengths.iter().max().unwrap();
        assert!(lengths[0] < max_length && lengths[2] < max_length);

        let encoder = PseudonymEncoder::new("researchStudyIdentifier", study_key()).unwrap();
        let encoded = encoder.encode_pseudonyms(&pseudonyms).unwrap();

        for item in &encoded {
            let blob = BASE64.decode(item).unwrap();
            assert_eq!(
                blob.len(),
                max_length + ENCRYPTED_OVERHEAD,
                "padded plaintext must equal the batch maximum"
            );
        }
    }

    #[test]
    fn test_ciphertext_length_does_not_reveal_cluster_size() {
        let persons = vec![
            TestMatchedPerson::of(&[("org1", "value11")]),
            TestMatchedPerson::of(&[
                ("org1", "value12"),
                ("org2", "value22"),
                ("org3", "value32"),
            ]),
        ];

        let pseudonymized = generator().create_pseudonyms_and_shuffle(&persons).unwrap();

        let lengths: Vec<usize> = pseudonymized
            .iter()
            .map(|person| person.pseudonym().len())
            .collect();
        assert_eq!(lengths[0], lengths[1]);
    }

    #[test]
    fn test_decoded_output_is_a_permutation_of_the_input() {
        let values: Vec<String> = (0..12).map(|n| format!("value{n:02}")).collect();
        let persons: Vec<TestMatchedPerson> = values
            .iter()
            .map(|value| TestMatchedPerson::of(&[("org1", value.as_str())]))
            .collect();

        let pseudonymized = generator().create_pseudonyms_and_shuffle(&persons).unwrap();
        let decoded = decoder().decode_pseudonyms(&pseudonymized);

        let mut recovered: Vec<String> = decoded
            .into_iter()
            .map(|result| result.unwrap().matches[0].medic_id.value.clone())
            .collect();
        recovered.sort();

        assert_eq!(recovered, values);
    }

    #[test]
    fn test_repeated_runs_change_output_positions() {
        let values: Vec<String> = (0..16).map(|n| format!("value{n:02}")).collect();
        let persons: Vec<TestMatchedPerson> = values
            .iter()
            .map(|value| TestMatchedPerson::of(&[("org1", value.as_str())]))
            .collect();
        let generator = generator();
        let decoder = decoder();

        let order = |pseudonymized: &[TestPseudonymizedPerson]| -> Vec<String> {
            decoder
                .decode_pseudonyms(pseudonymized)
                .into_iter()
                .map(|result| result.unwrap().matches[0].medic_id.value.clone())
                .collect()
        };

        let first = order(&generator.create_pseudonyms_and_shuffle(&persons).unwrap());
        let saw_different = (0..20).any(|_| {
            order(&generator.create_pseudonyms_and_shuffle(&persons).unwrap()) != first
        });

        assert!(saw_different, "output position must not be reproducible");
    }

    #[test]
    fn test_tampered_pseudonym_aborts_only_that_record() {
        let persons = vec![
            TestMatchedPerson::of(&[("org1", "value11")]),
            TestMatchedPerson::of(&[("org1", "value12")]),
        ];

        let mut pseudonymized =
            generator().create_pseudonyms_and_shuffle(&persons).unwrap();
        let mut blob = BASE64.decode(pseudonymized[0].pseudonym()).unwrap();
        blob[14] ^= 0x01;
        pseudonymized[0].pseudonym = BASE64.encode(blob);

        let decoded = decoder().decode_pseudonyms(&pseudonymized);

        assert!(decoded[0].is_err());
        assert!(decoded[1].is_ok());
    }
}
