//! Crypto primitives: NaCl box (X25519 + XSalsa20-Poly1305).
//!
//! Used only to wrap the per-envelope symmetric key for each recipient.
//! The box is keyed by the creator's secret key and the recipient's
//! public key, so opening it also authenticates the creator.
//!
//! Sealed key layout: `ciphertext(32) || poly1305_tag(16)`. The nonce is
//! stored separately in the recipient record.

use crypto_box::{aead::Aead, Nonce, PublicKey, SalsaBox, SecretKey};
use zeroize::Zeroizing;

use crate::constants::{
    BOX_NONCE_LENGTH, PUBLIC_KEY_LENGTH, SEALED_KEY_LENGTH, SECRET_KEY_LENGTH,
    SYMMETRIC_KEY_LENGTH,
};
use crate::errors::{HyboxError, HyboxResult};
use crate::keys::SymmetricKey;

fn salsa_box(public_key: &[u8; PUBLIC_KEY_LENGTH], secret_key: &[u8; SECRET_KEY_LENGTH]) -> SalsaBox {
    let pk = PublicKey::from(*public_key);
    let sk = SecretKey::from(*secret_key);
    SalsaBox::new(&pk, &sk)
}

/// Seal a symmetric key for one recipient.
///
/// # Errors
/// The box only rejects oversized input, which a 32-byte key never is;
/// any such failure surfaces as `PayloadTooLarge`.
pub fn seal_key(
    key: &[u8; SYMMETRIC_KEY_LENGTH],
    recipient_public_key: &[u8; PUBLIC_KEY_LENGTH],
    sender_secret_key: &[u8; SECRET_KEY_LENGTH],
    nonce: &[u8; BOX_NONCE_LENGTH],
) -> HyboxResult<[u8; SEALED_KEY_LENGTH]> {
    let too_large = HyboxError::PayloadTooLarge { len: key.len() };
    let sealed = salsa_box(recipient_public_key, sender_secret_key)
        .encrypt(Nonce::from_slice(nonce), &key[..])
        .map_err(|_| too_large.clone())?;
    sealed.try_into().map_err(|_| too_large)
}

/// Open a sealed symmetric key.
///
/// # Errors
/// Returns `HyboxError::KeyUnsealFailed` on any failure: wrong keypair,
/// wrong creator key, corrupted nonce, or tampered ciphertext. The cases
/// are deliberately indistinguishable.
pub fn open_key(
    sealed: &[u8; SEALED_KEY_LENGTH],
    sender_public_key: &[u8; PUBLIC_KEY_LENGTH],
    recipient_secret_key: &[u8; SECRET_KEY_LENGTH],
    nonce: &[u8; BOX_NONCE_LENGTH],
) -> HyboxResult<SymmetricKey> {
    let opened = Zeroizing::new(open_box(
        &sealed[..],
        sender_public_key,
        recipient_secret_key,
        nonce,
    )?);
    let key: [u8; SYMMETRIC_KEY_LENGTH] = opened
        .as_slice()
        .try_into()
        .map_err(|_| HyboxError::KeyUnsealFailed)?;
    Ok(Zeroizing::new(key))
}

fn open_box(
    ciphertext: &[u8],
    sender_public_key: &[u8; PUBLIC_KEY_LENGTH],
    recipient_secret_key: &[u8; SECRET_KEY_LENGTH],
    nonce: &[u8; BOX_NONCE_LENGTH],
) -> HyboxResult<Vec<u8>> {
    salsa_box(sender_public_key, recipient_secret_key)
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| HyboxError::KeyUnsealFailed)
}
