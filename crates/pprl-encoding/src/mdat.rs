//! MDAT row encoder.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use shared_crypto::SecretKey;
use shared_types::{Row, RowElement};

use crate::error::EncodingError;

/// Encrypts and decrypts the clinical (MDAT) cells of a result-set row.
///
/// The identifier cell is excluded from the ciphertext by contract: it
/// must stay queryable while the rest of the row is opaque. Callers
/// re-insert the identifier after encryption; `decrypt_row` expects it
/// back at the same index and passes it through.
///
/// Each cell is serialized with its type tag (`string:`, `integer:`,
/// `double:`, `timestamp:`, `json:`) before encryption so decryption
/// restores the original [`RowElement`] variant.
pub struct MdatEncoder {
    key: SecretKey,
    aad: Vec<u8>,
}

impl MdatEncoder {
    /// Create an encoder bound to a key and a context tag (e.g. the
    /// research-study identifier).
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::EmptyContextTag` for an empty tag.
    pub fn new(key: SecretKey, context_tag: &str) -> Result<Self, EncodingError> {
        if context_tag.is_empty() {
            return Err(EncodingError::EmptyContextTag);
        }
        Ok(Self {
            key,
            aad: context_tag.as_bytes().to_vec(),
        })
    }

    /// Encrypt every cell except the identifier cell.
    ///
    /// Returns a row one cell shorter than the input; the identifier is
    /// not part of the payload and must be re-inserted by the caller.
    pub fn encrypt_row(
        &self,
        row: &[RowElement],
        id_column_index: usize,
    ) -> Result<Row, EncodingError> {
        if id_column_index >= row.len() {
            return Err(EncodingError::IdentifierOutOfBounds {
                column: id_column_index,
                width: row.len(),
            });
        }

        let mut encrypted = Vec::with_capacity(row.len() - 1);
        for (index, cell) in row.iter().enumerate() {
            if index == id_column_index {
                continue;
            }
            encrypted.push(self.encrypt_cell(cell)?);
        }
        Ok(encrypted)
    }

    /// Decrypt a row whose identifier has been re-inserted at
    /// `id_column_index`; the identifier cell is passed through
    /// untouched.
    ///
    /// Returns the original cell count, order, and per-cell types.
    pub fn decrypt_row(
        &self,
        row: &[RowElement],
        id_column_index: usize,
    ) -> Result<Row, EncodingError> {
        if id_column_index >= row.len() {
            return Err(EncodingError::IdentifierOutOfBounds {
                column: id_column_index,
                width: row.len(),
            });
        }

        let mut decrypted = Vec::with_capacity(row.len());
        for (index, cell) in row.iter().enumerate() {
            if index == id_column_index {
                decrypted.push(cell.clone());
            } else {
                decrypted.push(self.decrypt_cell(cell, index)?);
            }
        }
        Ok(decrypted)
    }

    fn encrypt_cell(&self, cell: &RowElement) -> Result<RowElement, EncodingError> {
        let tagged = format!("{}:{}", cell.type_tag(), cell.value_as_string());
        let blob = shared_crypto::encrypt(tagged.as_bytes(), &self.aad, &self.key)?;
        Ok(RowElement::String(BASE64.encode(blob)))
    }

    fn decrypt_cell(&self, cell: &RowElement, column: usize) -> Result<RowElement, EncodingError> {
        let encoded = match cell {
            RowElement::String(value) => value,
            _ => return Err(EncodingError::EncryptedCellNotString { column }),
        };

        let blob = BASE64.decode(encoded)?;
        let plain = shared_crypto::decrypt(&blob, &self.aad, &self.key)?;
        let tagged = String::from_utf8(plain)
            .map_err(|_| EncodingError::MalformedCellPlaintext { column })?;

        let (tag, value) = tagged
            .split_once(':')
            .ok_or(EncodingError::MissingTypeTag { column })?;
        Ok(RowElement::from_tag_and_value(tag, value)?)
    }
}
