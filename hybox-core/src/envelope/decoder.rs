//! Envelope decoder and read-only view.
//!
//! Parsing is split from decryption: [`EnvelopeView::parse`] checks the
//! structure and borrows each field from the blob, [`decrypt`] then finds
//! the caller's record and opens the two layers.

use crate::cipher;
use crate::constants::{
    CIPHER_NONCE_LENGTH, CIPHER_TAG_LENGTH, FINGERPRINT_LENGTH, LENGTH_FIELD_LENGTH,
    MIN_BLOB_LENGTH, PUBLIC_KEY_LENGTH, RECIPIENT_RECORD_LENGTH, SECRET_KEY_LENGTH,
};
use crate::crypto;
use crate::encoding::{to_base64, to_hex};
use crate::errors::{HyboxError, HyboxResult};
use crate::hash::fingerprint;

use super::{field, parse_length, record_chunks, RecipientRecord};

/// Borrowed, bounds-checked view over an envelope blob.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeView<'a> {
    nonce: &'a [u8; CIPHER_NONCE_LENGTH],
    ciphertext: &'a [u8],
    creator_public_key: &'a [u8; PUBLIC_KEY_LENGTH],
    records: &'a [u8],
}

impl<'a> EnvelopeView<'a> {
    /// Split `blob` into its fields.
    ///
    /// # Errors
    /// Returns `HyboxError::MalformedBlob` if the blob is shorter than
    /// 60 bytes, the length field is not 16 ASCII digits, the ciphertext
    /// or creator key runs past the end, or the record region is not a
    /// whole number of 92-byte records.
    pub fn parse(blob: &'a [u8]) -> HyboxResult<Self> {
        if blob.len() < MIN_BLOB_LENGTH {
            return Err(HyboxError::MalformedBlob("shorter than minimum envelope"));
        }

        let nonce = field::<CIPHER_NONCE_LENGTH>(blob, 0, "truncated nonce")?;
        let ct_len = parse_length(field::<LENGTH_FIELD_LENGTH>(
            blob,
            CIPHER_NONCE_LENGTH,
            "truncated length field",
        )?)?;

        let ct_start = CIPHER_NONCE_LENGTH + LENGTH_FIELD_LENGTH;
        let ct_end = ct_start
            .checked_add(ct_len)
            .ok_or(HyboxError::MalformedBlob("truncated ciphertext"))?;
        let ciphertext = blob
            .get(ct_start..ct_end)
            .ok_or(HyboxError::MalformedBlob("truncated ciphertext"))?;

        let creator_public_key =
            field::<PUBLIC_KEY_LENGTH>(blob, ct_end, "truncated creator public key")?;

        let records = &blob[ct_end + PUBLIC_KEY_LENGTH..];
        if records.len() % RECIPIENT_RECORD_LENGTH != 0 {
            return Err(HyboxError::MalformedBlob("trailing partial recipient record"));
        }

        Ok(Self {
            nonce,
            ciphertext,
            creator_public_key,
            records,
        })
    }

    /// AES-GCM nonce.
    pub fn cipher_nonce(&self) -> &'a [u8; CIPHER_NONCE_LENGTH] {
        self.nonce
    }

    /// Ciphertext including the GCM tag.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Public key of the envelope's creator.
    pub fn creator_public_key(&self) -> &'a [u8; PUBLIC_KEY_LENGTH] {
        self.creator_public_key
    }

    /// Number of recipient records.
    pub fn recipient_count(&self) -> usize {
        self.records.len() / RECIPIENT_RECORD_LENGTH
    }

    /// Recipient records in blob order.
    pub fn records(&self) -> impl Iterator<Item = RecipientRecord> + 'a {
        record_chunks(self.records).map(|wire| RecipientRecord::from_array(&wire))
    }

    /// First record whose fingerprint equals `fingerprint`.
    ///
    /// Duplicate fingerprints are not special-cased: the first wins.
    pub fn find_record(&self, fingerprint: &[u8; FINGERPRINT_LENGTH]) -> Option<RecipientRecord> {
        record_chunks(self.records)
            .find(|wire| wire.starts_with(fingerprint))
            .map(|wire| RecipientRecord::from_array(&wire))
    }

    /// Public metadata about this envelope. Nothing here needs a key.
    pub fn summary(&self) -> EnvelopeSummary {
        EnvelopeSummary {
            ciphertext_length: self.ciphertext.len(),
            plaintext_length: self.ciphertext.len().saturating_sub(CIPHER_TAG_LENGTH),
            creator_public_key: to_base64(self.creator_public_key),
            creator_fingerprint: to_hex(&fingerprint(self.creator_public_key)),
            recipient_fingerprints: self
                .records()
                .map(|record| to_hex(&record.fingerprint))
                .collect(),
        }
    }
}

/// Inspection output for an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvelopeSummary {
    /// Length of the ciphertext field, GCM tag included.
    pub ciphertext_length: usize,
    /// Plaintext length implied by the ciphertext length.
    pub plaintext_length: usize,
    /// Creator public key, base64.
    pub creator_public_key: String,
    /// Creator fingerprint, hex.
    pub creator_fingerprint: String,
    /// Recipient fingerprints in blob order, hex.
    pub recipient_fingerprints: Vec<String>,
}

/// Decrypt `blob` as the holder of `(self_public_key, self_secret_key)`.
///
/// # Errors
/// - `MalformedBlob` if the structure is invalid (see [`EnvelopeView::parse`]).
/// - `RecipientNotAuthorized` if no record carries our fingerprint.
/// - `KeyUnsealFailed` if our record does not open.
/// - `PayloadDecryptionFailed` if the payload does not authenticate.
///
/// No plaintext is returned unless both layers authenticate.
pub fn decrypt(
    blob: &[u8],
    self_public_key: &[u8; PUBLIC_KEY_LENGTH],
    self_secret_key: &[u8; SECRET_KEY_LENGTH],
) -> HyboxResult<Vec<u8>> {
    let result = open(blob, self_public_key, self_secret_key);
    match &result {
        Ok(plaintext) => tracing::debug!(plaintext_len = plaintext.len(), "envelope opened"),
        Err(e) => tracing::debug!(error = %e, blob_len = blob.len(), "envelope open failed"),
    }
    result
}

fn open(
    blob: &[u8],
    self_public_key: &[u8; PUBLIC_KEY_LENGTH],
    self_secret_key: &[u8; SECRET_KEY_LENGTH],
) -> HyboxResult<Vec<u8>> {
    let view = EnvelopeView::parse(blob)?;
    let record = view
        .find_record(&fingerprint(self_public_key))
        .ok_or(HyboxError::RecipientNotAuthorized)?;

    let key = crypto::open_key(
        &record.sealed_key,
        view.creator_public_key(),
        self_secret_key,
        &record.box_nonce,
    )?;
    cipher::open(&key, view.cipher_nonce(), view.ciphertext())
}
