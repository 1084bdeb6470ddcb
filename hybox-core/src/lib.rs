//! Hybox Core: multi-recipient hybrid envelope encryption.
//!
//! A plaintext is sealed once with AES-256-GCM under a fresh symmetric
//! key. That key is then sealed separately for every authorized recipient
//! with NaCl box (X25519 + XSalsa20-Poly1305), keyed by the creator's
//! secret key and the recipient's public key. Any listed recipient can
//! open the envelope; nobody else can.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Byte sizes of every blob field |
//! | [`errors`] | `HyboxError`, the single error type |
//! | [`entropy`] | OS-backed randomness behind the `EntropySource` seam |
//! | [`keys`] | X25519 keypairs and symmetric key generation |
//! | [`hash`] | SHA-1 public key fingerprints |
//! | [`encoding`] | base64, hex, and the key text format |
//! | [`cipher`] | AES-256-GCM payload seal/open |
//! | [`crypto`] | NaCl box seal/open of the symmetric key |
//! | [`envelope`] | Blob encoder, decoder, and inspection view |
//!
//! # Blob layout
//!
//! ```text
//! nonce(12) || len(16, ASCII decimal) || ciphertext(len) || creator_pk(32)
//!           || { fingerprint(20) || box_nonce(24) || sealed_key(48) } * R
//! ```
//!
//! The layout carries no version field. Any change to it breaks every
//! previously produced blob.
//!
//! # Example
//!
//! ```rust
//! use hybox_core::{decrypt, encrypt, generate_keypair};
//!
//! # fn main() -> Result<(), hybox_core::HyboxError> {
//! let alice = generate_keypair()?;
//! let bob = generate_keypair()?;
//!
//! let blob = encrypt(
//!     b"Corporations are people, my friend",
//!     &[alice.public_key, bob.public_key],
//!     &alice.public_key,
//!     &alice.secret_key,
//! )?;
//!
//! let opened = decrypt(&blob, &bob.public_key, &bob.secret_key)?;
//! assert_eq!(opened, b"Corporations are people, my friend");
//! # Ok(())
//! # }
//! ```

/// Blob field sizes and key-stretching parameters.
pub mod constants;

/// Error types for hybox-core operations.
pub mod errors;

/// Entropy source: OS CSPRNG with an injectable seam.
pub mod entropy;

/// Keypairs and symmetric keys.
pub mod keys;

/// Public key fingerprints (SHA-1).
pub mod hash;

/// Encoding utilities: base64, hex, key text.
pub mod encoding;

/// Symmetric AEAD: AES-256-GCM.
pub mod cipher;

/// Public-key AEAD: NaCl box (XSalsa20-Poly1305).
pub mod crypto;

/// Envelope encoder, decoder, and read-only view.
pub mod envelope;

pub use encoding::{decode_key_from_bytes, decode_key_from_text, encode_key_to_text};
pub use entropy::{random_bytes, EntropySource, OsEntropy};
pub use envelope::{
    decrypt, encrypt, Encoder, EnvelopeOptions, EnvelopeSummary, EnvelopeView, RecipientRecord,
};
pub use errors::{HyboxError, HyboxResult};
pub use hash::fingerprint;
pub use keys::{generate_keypair, generate_symmetric_key, KeyPair, KeySource, SymmetricKey};
