//! Envelope: the multi-recipient blob.
//!
//! ```text
//! offset 0         12                 28           28+L          60+L
//!        | nonce   | length (ASCII)   | ciphertext | creator_pk  | record * R |
//!        | 12      | 16               | L          | 32          | 92 each    |
//! ```
//!
//! A record is `fingerprint(20) || box_nonce(24) || sealed_key(48)`.
//! Blobs are immutable once built; there is no version field.

mod decoder;
mod encoder;

pub use decoder::{decrypt, EnvelopeSummary, EnvelopeView};
pub use encoder::{encrypt, Encoder};

use crate::constants::{
    BOX_NONCE_LENGTH, CIPHER_NONCE_LENGTH, FINGERPRINT_LENGTH, LENGTH_FIELD_LENGTH,
    PUBLIC_KEY_LENGTH, RECIPIENT_RECORD_LENGTH, SEALED_KEY_LENGTH,
};
use crate::errors::{HyboxError, HyboxResult};
use crate::keys::KeySource;

/// Library-level configuration for building envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeOptions {
    /// How the per-envelope symmetric key is generated.
    pub key_source: KeySource,
}

/// One recipient's sealed copy of the symmetric key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRecord {
    /// SHA-1 of the recipient's public key.
    pub fingerprint: [u8; FINGERPRINT_LENGTH],
    /// Nonce used to seal this record's key.
    pub box_nonce: [u8; BOX_NONCE_LENGTH],
    /// NaCl box of the symmetric key (32 bytes + 16-byte MAC).
    pub sealed_key: [u8; SEALED_KEY_LENGTH],
}

impl RecipientRecord {
    /// Append the 92-byte wire form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.fingerprint);
        out.extend_from_slice(&self.box_nonce);
        out.extend_from_slice(&self.sealed_key);
    }

    /// Wire form as an owned array.
    pub fn to_bytes(&self) -> [u8; RECIPIENT_RECORD_LENGTH] {
        let mut out = [0u8; RECIPIENT_RECORD_LENGTH];
        let (fp, rest) = out.split_at_mut(FINGERPRINT_LENGTH);
        let (nonce, sealed) = rest.split_at_mut(BOX_NONCE_LENGTH);
        fp.copy_from_slice(&self.fingerprint);
        nonce.copy_from_slice(&self.box_nonce);
        sealed.copy_from_slice(&self.sealed_key);
        out
    }

    /// Parse a record from exactly 92 bytes.
    ///
    /// # Errors
    /// Returns `HyboxError::MalformedBlob` if `bytes` is not 92 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> HyboxResult<Self> {
        let exact: &[u8; RECIPIENT_RECORD_LENGTH] = bytes
            .try_into()
            .map_err(|_| HyboxError::MalformedBlob("recipient record is not 92 bytes"))?;
        Ok(Self::from_array(exact))
    }

    /// Split a 92-byte wire record into its fields.
    pub fn from_array(bytes: &[u8; RECIPIENT_RECORD_LENGTH]) -> Self {
        let mut record = Self {
            fingerprint: [0; FINGERPRINT_LENGTH],
            box_nonce: [0; BOX_NONCE_LENGTH],
            sealed_key: [0; SEALED_KEY_LENGTH],
        };
        let (fp, rest) = bytes.split_at(FINGERPRINT_LENGTH);
        let (nonce, sealed) = rest.split_at(BOX_NONCE_LENGTH);
        record.fingerprint.copy_from_slice(fp);
        record.box_nonce.copy_from_slice(nonce);
        record.sealed_key.copy_from_slice(sealed);
        record
    }
}

/// Iterate `region` as whole 92-byte wire records.
///
/// `chunks_exact` only yields full chunks, so every copy is exact. A
/// trailing partial record is left out; [`EnvelopeView::parse`] rejects
/// blobs that have one before any view exists.
pub(crate) fn record_chunks(
    region: &[u8],
) -> impl Iterator<Item = [u8; RECIPIENT_RECORD_LENGTH]> + '_ {
    region.chunks_exact(RECIPIENT_RECORD_LENGTH).map(|chunk| {
        let mut wire = [0u8; RECIPIENT_RECORD_LENGTH];
        wire.copy_from_slice(chunk);
        wire
    })
}

/// Render a ciphertext length as 16 zero-padded ASCII digits.
///
/// # Errors
/// Returns `HyboxError::PayloadTooLarge` if `len` needs more than 16 digits.
pub fn encode_length(len: usize) -> HyboxResult<[u8; LENGTH_FIELD_LENGTH]> {
    let digits = format!("{len:0width$}", width = LENGTH_FIELD_LENGTH);
    digits
        .as_bytes()
        .try_into()
        .map_err(|_| HyboxError::PayloadTooLarge { len })
}

/// Parse the 16-digit length field.
///
/// Only ASCII `0`-`9` are accepted: no sign, no whitespace.
///
/// # Errors
/// Returns `HyboxError::MalformedBlob` on any other byte, or if the value
/// does not fit in `usize`.
pub fn parse_length(field: &[u8; LENGTH_FIELD_LENGTH]) -> HyboxResult<usize> {
    let mut value: u64 = 0;
    for &b in field {
        if !b.is_ascii_digit() {
            return Err(HyboxError::MalformedBlob("non-numeric length field"));
        }
        // 16 digits never overflow u64.
        value = value * 10 + u64::from(b - b'0');
    }
    usize::try_from(value).map_err(|_| HyboxError::MalformedBlob("length field out of range"))
}

/// Total blob size for a ciphertext of `ciphertext_len` bytes and
/// `recipients` records.
pub fn encoded_len(ciphertext_len: usize, recipients: usize) -> usize {
    CIPHER_NONCE_LENGTH
        + LENGTH_FIELD_LENGTH
        + ciphertext_len
        + PUBLIC_KEY_LENGTH
        + RECIPIENT_RECORD_LENGTH * recipients
}

/// Borrow `N` bytes of `bytes` starting at `start` as a fixed array.
fn field<'a, const N: usize>(
    bytes: &'a [u8],
    start: usize,
    what: &'static str,
) -> HyboxResult<&'a [u8; N]> {
    start
        .checked_add(N)
        .and_then(|end| bytes.get(start..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(HyboxError::MalformedBlob(what))
}
