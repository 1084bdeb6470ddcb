//! Envelope encoder.

use crate::cipher;
use crate::constants::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::crypto;
use crate::entropy::{box_nonce, cipher_nonce, EntropySource, OsEntropy};
use crate::errors::HyboxResult;
use crate::hash::fingerprint;
use crate::keys::generate_symmetric_key_with;

use super::{encode_length, encoded_len, EnvelopeOptions, RecipientRecord};

/// Builds envelopes, drawing randomness from `E`.
///
/// Entropy is consumed in a fixed order (symmetric key, cipher nonce,
/// then one box nonce per recipient in input order), so an encoder fed
/// a reproducible source emits reproducible blobs.
#[derive(Debug, Clone, Default)]
pub struct Encoder<E = OsEntropy> {
    options: EnvelopeOptions,
    entropy: E,
}

impl Encoder<OsEntropy> {
    /// Encoder with default options and the OS CSPRNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with the given options and the OS CSPRNG.
    pub fn with_options(options: EnvelopeOptions) -> Self {
        Self {
            options,
            entropy: OsEntropy,
        }
    }
}

impl<E: EntropySource> Encoder<E> {
    /// Encoder with an explicit entropy source.
    pub fn with_entropy(options: EnvelopeOptions, entropy: E) -> Self {
        Self { options, entropy }
    }

    /// Options this encoder was built with.
    pub fn options(&self) -> &EnvelopeOptions {
        &self.options
    }

    /// Encrypt `plaintext` so that each key in `recipients` can open it.
    ///
    /// Records are written in the order of `recipients`. The creator is
    /// not added implicitly: include `sender_public_key` in `recipients`
    /// if the creator should be able to read the envelope back.
    ///
    /// # Errors
    /// - `EntropyUnavailable` if the entropy source fails.
    /// - `PayloadTooLarge` if the ciphertext length needs more than 16
    ///   decimal digits.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        recipients: &[[u8; PUBLIC_KEY_LENGTH]],
        sender_public_key: &[u8; PUBLIC_KEY_LENGTH],
        sender_secret_key: &[u8; SECRET_KEY_LENGTH],
    ) -> HyboxResult<Vec<u8>> {
        let key = generate_symmetric_key_with(self.options.key_source, &mut self.entropy)?;
        let nonce = cipher_nonce(&mut self.entropy)?;

        let ciphertext = cipher::seal(&key, &nonce, plaintext)?;
        let length_field = encode_length(ciphertext.len())?;

        let mut blob = Vec::with_capacity(encoded_len(ciphertext.len(), recipients.len()));
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&length_field);
        blob.extend_from_slice(&ciphertext);
        blob.extend_from_slice(sender_public_key);

        for recipient in recipients {
            let record_nonce = box_nonce(&mut self.entropy)?;
            let record = RecipientRecord {
                fingerprint: fingerprint(recipient),
                box_nonce: record_nonce,
                sealed_key: crypto::seal_key(&key, recipient, sender_secret_key, &record_nonce)?,
            };
            record.write_to(&mut blob);
        }

        tracing::debug!(
            recipients = recipients.len(),
            ciphertext_len = ciphertext.len(),
            blob_len = blob.len(),
            key_source = ?self.options.key_source,
            "envelope sealed"
        );
        Ok(blob)
    }
}

/// Encrypt with default options and the OS CSPRNG.
///
/// See [`Encoder::encrypt`].
pub fn encrypt(
    plaintext: &[u8],
    recipients: &[[u8; PUBLIC_KEY_LENGTH]],
    sender_public_key: &[u8; PUBLIC_KEY_LENGTH],
    sender_secret_key: &[u8; SECRET_KEY_LENGTH],
) -> HyboxResult<Vec<u8>> {
    Encoder::new().encrypt(plaintext, recipients, sender_public_key, sender_secret_key)
}
