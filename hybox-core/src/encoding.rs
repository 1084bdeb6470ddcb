//! Encoding utilities: base64, hex, and the key text format.
//!
//! ## Key text format
//! A key is stored as standard base64 (with padding) of its 32 raw bytes,
//! which is always 44 characters, optionally followed by a free-form
//! comment with no separator:
//!
//! ```text
//! 3q2+7wAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=alice@laptop
//! ```
//!
//! Readers take exactly the first 44 bytes and ignore the rest. The
//! comment is not required to be UTF-8, and non-zero trailing bits in the
//! last base64 character are accepted.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::Engine;

use crate::constants::{KEY_TEXT_LENGTH, PUBLIC_KEY_LENGTH};
use crate::errors::{HyboxError, HyboxResult};

/// Standard alphabet with padding, tolerant of non-canonical trailing bits.
const KEY_TEXT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 to bytes.
///
/// Returns `None` on invalid input; callers map that to the error kind
/// that fits their context.
pub fn from_base64(encoded: &str) -> Option<Vec<u8>> {
    STANDARD.decode(encoded).ok()
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// Returns `None` on odd length or non-hex characters.
pub fn from_hex(encoded: &str) -> Option<Vec<u8>> {
    if encoded.len() % 2 != 0 || !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&encoded[i..i + 2], 16).ok())
        .collect()
}

/// Render a 32-byte key in the key text format.
///
/// `comment` is appended verbatim after the 44 base64 characters.
pub fn encode_key_to_text(key: &[u8; PUBLIC_KEY_LENGTH], comment: &str) -> String {
    let mut text = to_base64(key);
    text.push_str(comment);
    text
}

/// Parse a 32-byte key from key text, ignoring any trailing comment.
///
/// # Errors
/// See [`decode_key_from_bytes`].
pub fn decode_key_from_text(text: &str) -> HyboxResult<[u8; PUBLIC_KEY_LENGTH]> {
    decode_key_from_bytes(text.as_bytes())
}

/// Parse a 32-byte key from the raw bytes of a key file.
///
/// Only the first 44 bytes are read; whatever follows is the comment and
/// may hold any bytes.
///
/// # Errors
/// Returns `HyboxError::MalformedKeyText` if the input is shorter than
/// 44 bytes, the first 44 bytes are not valid base64, or they decode to
/// fewer than 32 bytes.
pub fn decode_key_from_bytes(bytes: &[u8]) -> HyboxResult<[u8; PUBLIC_KEY_LENGTH]> {
    let encoded = bytes
        .get(..KEY_TEXT_LENGTH)
        .ok_or(HyboxError::MalformedKeyText("shorter than 44 characters"))?;
    let raw = KEY_TEXT_ENGINE
        .decode(encoded)
        .map_err(|_| HyboxError::MalformedKeyText("invalid base64"))?;
    raw.get(..PUBLIC_KEY_LENGTH)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(HyboxError::MalformedKeyText("decodes to fewer than 32 bytes"))
}
