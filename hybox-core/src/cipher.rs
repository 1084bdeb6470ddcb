//! Symmetric AEAD: AES-256-GCM over the envelope payload.
//!
//! The payload is sealed once per envelope, under a key that is never
//! reused, with no associated data. Output is `ciphertext || tag`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::constants::{CIPHER_NONCE_LENGTH, SYMMETRIC_KEY_LENGTH};
use crate::errors::{HyboxError, HyboxResult};

/// Seal `plaintext` under `(key, nonce)`.
///
/// AES-GCM only refuses plaintexts beyond its 64 GiB per-nonce limit;
/// that is reported as `PayloadTooLarge`.
pub fn seal(
    key: &[u8; SYMMETRIC_KEY_LENGTH],
    nonce: &[u8; CIPHER_NONCE_LENGTH],
    plaintext: &[u8],
) -> HyboxResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| HyboxError::PayloadTooLarge {
            len: plaintext.len(),
        })
}

/// Open `ciphertext || tag` under `(key, nonce)`.
///
/// # Errors
/// Returns `HyboxError::PayloadDecryptionFailed` on tag mismatch, wrong
/// key, or input shorter than the tag.
pub fn open(
    key: &[u8; SYMMETRIC_KEY_LENGTH],
    nonce: &[u8; CIPHER_NONCE_LENGTH],
    ciphertext: &[u8],
) -> HyboxResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| HyboxError::PayloadDecryptionFailed)
}
