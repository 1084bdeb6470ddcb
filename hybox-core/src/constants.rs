//! Envelope constants: byte sizes of every blob field.
//!
//! These values define the wire layout. Blobs carry no version field,
//! so changing any of them breaks compatibility with existing blobs.

/// AES-256-GCM nonce length in bytes.
pub const CIPHER_NONCE_LENGTH: usize = 12;

/// AES-256-GCM authentication tag length in bytes.
pub const CIPHER_TAG_LENGTH: usize = 16;

/// Width of the ASCII decimal ciphertext length field.
pub const LENGTH_FIELD_LENGTH: usize = 16;

/// NaCl public key length in bytes (Curve25519).
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// NaCl secret key length in bytes (Curve25519).
pub const SECRET_KEY_LENGTH: usize = 32;

/// AES-256 key length in bytes.
pub const SYMMETRIC_KEY_LENGTH: usize = 32;

/// SHA-1 fingerprint length in bytes.
pub const FINGERPRINT_LENGTH: usize = 20;

/// NaCl box nonce length in bytes.
pub const BOX_NONCE_LENGTH: usize = 24;

/// NaCl box overhead (Poly1305 MAC).
pub const BOX_OVERHEAD: usize = 16;

/// Sealed symmetric key: key plus box MAC.
pub const SEALED_KEY_LENGTH: usize = SYMMETRIC_KEY_LENGTH + BOX_OVERHEAD;

/// One recipient record: `fingerprint || box_nonce || sealed_key`.
pub const RECIPIENT_RECORD_LENGTH: usize =
    FINGERPRINT_LENGTH + BOX_NONCE_LENGTH + SEALED_KEY_LENGTH;

/// Smallest structurally valid blob: no ciphertext, no recipients.
pub const MIN_BLOB_LENGTH: usize = CIPHER_NONCE_LENGTH + LENGTH_FIELD_LENGTH + PUBLIC_KEY_LENGTH;

/// Characters of base64 text that encode one 32-byte key (with padding).
pub const KEY_TEXT_LENGTH: usize = 44;

/// Random password length fed to PBKDF2 for stretched symmetric keys.
pub const PBKDF2_PASSWORD_LENGTH: usize = 32;

/// Random salt length fed to PBKDF2 for stretched symmetric keys.
pub const PBKDF2_SALT_LENGTH: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count for stretched symmetric keys.
pub const PBKDF2_ROUNDS: u32 = 5000;
