//! Error types for hybox-core.
//!
//! Every failure is returned to the caller; nothing in this crate aborts
//! the process. The two authentication failures carry no detail, so a
//! caller cannot tell a wrong key from corrupted bytes beyond the kind.

/// Unified error type for all hybox-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HyboxError {
    /// The OS random source could not fill the requested buffer.
    #[error("Entropy unavailable")]
    EntropyUnavailable,

    /// Ciphertext length does not fit the 16-digit length field.
    #[error("Payload too large: ciphertext of {len} bytes exceeds the length field")]
    PayloadTooLarge {
        /// Ciphertext length that failed to encode.
        len: usize,
    },

    /// Blob is truncated or structurally invalid.
    #[error("Malformed blob: {0}")]
    MalformedBlob(&'static str),

    /// Key text is not 44 characters of base64 encoding 32 bytes.
    #[error("Malformed key text: {0}")]
    MalformedKeyText(&'static str),

    /// No recipient record carries the caller's fingerprint.
    #[error("Recipient not authorized")]
    RecipientNotAuthorized,

    /// NaCl box open of the sealed symmetric key failed.
    #[error("Key unseal failed")]
    KeyUnsealFailed,

    /// AES-256-GCM open of the payload failed.
    #[error("Payload decryption failed")]
    PayloadDecryptionFailed,
}

/// Convenience alias used throughout the crate.
pub type HyboxResult<T> = Result<T, HyboxError>;
