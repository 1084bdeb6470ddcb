//! Keys: X25519 keypairs and per-envelope symmetric keys.
//!
//! Keys here are plain values. Loading them from or saving them to
//! storage is the caller's concern; see the key text helpers in
//! [`crate::encoding`] for the on-disk representation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{
    PBKDF2_PASSWORD_LENGTH, PBKDF2_ROUNDS, PBKDF2_SALT_LENGTH, PUBLIC_KEY_LENGTH,
    SECRET_KEY_LENGTH, SYMMETRIC_KEY_LENGTH,
};
use crate::entropy::{random_array, EntropySource, OsEntropy};
use crate::errors::HyboxResult;

/// X25519 keypair used for NaCl box.
///
/// The secret key is zeroized on drop.
#[derive(Clone)]
pub struct KeyPair {
    /// Curve25519 public key (32 bytes).
    pub public_key: [u8; PUBLIC_KEY_LENGTH],
    /// Curve25519 secret key (32 bytes).
    pub secret_key: [u8; SECRET_KEY_LENGTH],
}

impl KeyPair {
    /// Rebuild a keypair from its secret half.
    ///
    /// The public key of an X25519 pair is derivable from the secret key,
    /// so a private key file alone is enough to recover both.
    pub fn from_secret_key(secret_key: [u8; SECRET_KEY_LENGTH]) -> Self {
        let public_key = *crypto_box::SecretKey::from(secret_key).public_key().as_bytes();
        Self {
            public_key,
            secret_key,
        }
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &crate::encoding::to_hex(&self.public_key))
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh X25519 keypair from the OS CSPRNG.
///
/// # Errors
/// Returns `HyboxError::EntropyUnavailable` if the OS source fails.
pub fn generate_keypair() -> HyboxResult<KeyPair> {
    generate_keypair_with(&mut OsEntropy)
}

/// Generate a keypair drawing the secret key from `source`.
pub fn generate_keypair_with(source: &mut impl EntropySource) -> HyboxResult<KeyPair> {
    let secret = Zeroizing::new(random_array::<SECRET_KEY_LENGTH>(source)?);
    Ok(KeyPair::from_secret_key(*secret))
}

/// 32-byte AES-256 key, zeroized on drop.
pub type SymmetricKey = Zeroizing<[u8; SYMMETRIC_KEY_LENGTH]>;

/// How the per-envelope symmetric key is produced.
///
/// Both variants carry 256 bits of OS entropy. `Stretched` additionally
/// runs PBKDF2-HMAC-SHA256 (5000 rounds) over a random password and salt,
/// matching the key generation of earlier deployments of this format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeySource {
    /// 32 bytes straight from the entropy source.
    #[default]
    Direct,
    /// PBKDF2-HMAC-SHA256 over a random 32-byte password and salt.
    Stretched,
}

/// Generate a symmetric key from the OS CSPRNG.
///
/// # Errors
/// Returns `HyboxError::EntropyUnavailable` if the OS source fails.
pub fn generate_symmetric_key(kind: KeySource) -> HyboxResult<SymmetricKey> {
    generate_symmetric_key_with(kind, &mut OsEntropy)
}

/// Generate a symmetric key drawing randomness from `source`.
pub fn generate_symmetric_key_with(
    kind: KeySource,
    source: &mut impl EntropySource,
) -> HyboxResult<SymmetricKey> {
    match kind {
        KeySource::Direct => Ok(Zeroizing::new(random_array(source)?)),
        KeySource::Stretched => {
            let password = Zeroizing::new(random_array::<PBKDF2_PASSWORD_LENGTH>(source)?);
            let salt = random_array::<PBKDF2_SALT_LENGTH>(source)?;
            Ok(stretch(&password[..], &salt))
        }
    }
}

fn stretch(password: &[u8], salt: &[u8]) -> SymmetricKey {
    let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_LENGTH]);
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ROUNDS, &mut key[..]);
    key
}
