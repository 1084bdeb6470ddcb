//! Entropy source: cryptographically secure random bytes.
//!
//! Everything that needs randomness (nonces, keypairs, symmetric keys)
//! draws it through [`EntropySource`]. Production code uses [`OsEntropy`],
//! which holds no state of its own and defers to the OS CSPRNG, so it is
//! safe to use from any number of threads at once.
//!
//! A source either fills the whole buffer or returns
//! `HyboxError::EntropyUnavailable`. Short reads are never surfaced.

use rand_core::{OsRng, RngCore};

use crate::constants::{BOX_NONCE_LENGTH, CIPHER_NONCE_LENGTH};
use crate::errors::{HyboxError, HyboxResult};

/// A fallible supplier of random bytes.
pub trait EntropySource {
    /// Fill `dest` completely or fail.
    ///
    /// # Errors
    /// Returns `HyboxError::EntropyUnavailable` if the buffer cannot be
    /// filled in full.
    fn fill(&mut self, dest: &mut [u8]) -> HyboxResult<()>;
}

/// OS-backed CSPRNG (`getrandom` via `rand_core::OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> HyboxResult<()> {
        let requested = dest.len();
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::warn!(requested, error = %e, "OS entropy read failed");
            HyboxError::EntropyUnavailable
        })
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, dest: &mut [u8]) -> HyboxResult<()> {
        (**self).fill(dest)
    }
}

/// Return `n` bytes from the OS CSPRNG.
///
/// # Errors
/// Returns `HyboxError::EntropyUnavailable` if the OS source fails.
pub fn random_bytes(n: usize) -> HyboxResult<Vec<u8>> {
    let mut out = vec![0u8; n];
    OsEntropy.fill(&mut out)?;
    Ok(out)
}

/// Fill a fixed-size array from `source`.
pub fn random_array<const N: usize>(source: &mut impl EntropySource) -> HyboxResult<[u8; N]> {
    let mut out = [0u8; N];
    source.fill(&mut out)?;
    Ok(out)
}

/// Fresh 12-byte AES-GCM nonce.
///
/// A new symmetric key is drawn for every envelope, so random nonces
/// never repeat under the same key.
pub fn cipher_nonce(source: &mut impl EntropySource) -> HyboxResult<[u8; CIPHER_NONCE_LENGTH]> {
    random_array(source)
}

/// Fresh 24-byte NaCl box nonce, one per recipient record.
pub fn box_nonce(source: &mut impl EntropySource) -> HyboxResult<[u8; BOX_NONCE_LENGTH]> {
    random_array(source)
}
