//! Key files: one key per file in key text form.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use hybox_core::constants::PUBLIC_KEY_LENGTH;
use hybox_core::{decode_key_from_bytes, encode_key_to_text};

/// Permission bits for public key files.
pub const PUBLIC_KEY_MODE: u32 = 0o644;
/// Permission bits for private key files.
pub const PRIVATE_KEY_MODE: u32 = 0o600;

/// Write `key` (with `comment`) to `path`, replacing any existing file.
///
/// `mode` is applied on Unix and ignored elsewhere.
pub fn write_key_file(
    path: &Path,
    key: &[u8; PUBLIC_KEY_LENGTH],
    comment: &str,
    mode: u32,
) -> anyhow::Result<()> {
    let text = encode_key_to_text(key, comment);

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    // The creation mode is filtered by umask and ignored for existing files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), mode = format_args!("{mode:o}"), "key file written");
    Ok(())
}

/// Read the raw key bytes stored in `path`.
///
/// The comment after the key text is never decoded, so it may hold bytes
/// that are not UTF-8.
pub fn read_key_file(path: &Path) -> anyhow::Result<[u8; PUBLIC_KEY_LENGTH]> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read key file {}", path.display()))?;
    decode_key_from_bytes(&bytes).with_context(|| format!("invalid key file {}", path.display()))
}
