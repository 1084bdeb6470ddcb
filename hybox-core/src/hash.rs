//! Public key fingerprints: SHA-1 of the raw 32-byte key.
//!
//! Fingerprints tag recipient records so a decoder can find its own
//! record without trying every sealed key. They are lookup tags, not a
//! trust anchor: authenticity comes from the NaCl box MAC, and a forged
//! or colliding fingerprint only leads to `KeyUnsealFailed`.

use sha1::{Digest, Sha1};

use crate::constants::{FINGERPRINT_LENGTH, PUBLIC_KEY_LENGTH};
use crate::encoding;

/// Compute the 20-byte fingerprint of a public key.
///
/// Only meaningful for public keys. Encoder and decoder both call this
/// on the raw key bytes, so the result is stable across both sides.
pub fn fingerprint(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> [u8; FINGERPRINT_LENGTH] {
    sha1(public_key)
}

/// Fingerprint as a lowercase hex string (40 characters).
pub fn fingerprint_hex(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    encoding::to_hex(&fingerprint(public_key))
}

fn sha1(data: &[u8]) -> [u8; FINGERPRINT_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}
