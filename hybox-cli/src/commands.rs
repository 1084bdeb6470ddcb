//! Subcommand handlers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use hybox_core::hash::fingerprint_hex;
use hybox_core::{
    decrypt, generate_keypair, Encoder, EnvelopeOptions, EnvelopeSummary, EnvelopeView, KeyPair,
    KeySource,
};

use crate::config::Command;
use crate::keyfile::{read_key_file, write_key_file, PRIVATE_KEY_MODE, PUBLIC_KEY_MODE};

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Keygen {
            out_dir,
            name,
            comment,
        } => {
            let (public, private) = keygen(&out_dir, &name, &comment)?;
            println!("Public key:  {}", public.display());
            println!("Private key: {}", private.display());
            println!("Fingerprint: {}", fingerprint_hex(&read_key_file(&public)?));
        }

        Command::Fingerprint { keyfile } => {
            let key = read_key_file(&keyfile)?;
            println!("{}", fingerprint_hex(&key));
        }

        Command::Encrypt {
            input,
            output,
            public,
            private,
            recipients,
            stretch_key,
        } => {
            let key_source = if stretch_key {
                KeySource::Stretched
            } else {
                KeySource::Direct
            };
            let written = encrypt_file(&input, &output, &public, &private, &recipients, key_source)?;
            println!(
                "Wrote {} bytes for {} recipient(s) to {}",
                written,
                recipients.len(),
                output.display()
            );
        }

        Command::Decrypt {
            input,
            output,
            public,
            private,
        } => {
            let written = decrypt_file(&input, &output, &public, &private)?;
            println!("Wrote {} bytes to {}", written, output.display());
        }

        Command::Inspect { blob, json } => {
            let summary = inspect_file(&blob)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

/// Create `out_dir/NAME_public.key` and `out_dir/NAME_private.key`.
pub fn keygen(out_dir: &Path, name: &str, comment: &str) -> anyhow::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let keypair = generate_keypair().context("failed to generate keypair")?;
    let public = out_dir.join(format!("{name}_public.key"));
    let private = out_dir.join(format!("{name}_private.key"));

    write_key_file(&public, &keypair.public_key, comment, PUBLIC_KEY_MODE)?;
    write_key_file(&private, &keypair.secret_key, "", PRIVATE_KEY_MODE)?;

    tracing::info!(key_name = name, dir = %out_dir.display(), "keypair generated");
    Ok((public, private))
}

/// Encrypt `input` into `output`. Returns the envelope size.
pub fn encrypt_file(
    input: &Path,
    output: &Path,
    public: &Path,
    private: &Path,
    recipients: &[PathBuf],
    key_source: KeySource,
) -> anyhow::Result<usize> {
    let creator = load_keypair(public, private)?;
    let recipient_keys = recipients
        .iter()
        .map(|path| read_key_file(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if recipient_keys.is_empty() {
        tracing::warn!("no recipients given; nobody will be able to open this envelope");
    }

    let plaintext =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let blob = Encoder::with_options(EnvelopeOptions { key_source })
        .encrypt(&plaintext, &recipient_keys, &creator.public_key, &creator.secret_key)
        .context("encryption failed")?;

    fs::write(output, &blob).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(blob.len())
}

/// Decrypt `input` into `output`. Returns the plaintext size.
pub fn decrypt_file(
    input: &Path,
    output: &Path,
    public: &Path,
    private: &Path,
) -> anyhow::Result<usize> {
    let own = load_keypair(public, private)?;
    let blob = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let plaintext = decrypt(&blob, &own.public_key, &own.secret_key)
        .with_context(|| format!("failed to decrypt {}", input.display()))?;

    fs::write(output, &plaintext)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(plaintext.len())
}

/// Summarize the envelope at `path` without any key.
pub fn inspect_file(path: &Path) -> anyhow::Result<EnvelopeSummary> {
    let blob = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let view = EnvelopeView::parse(&blob)
        .with_context(|| format!("{} is not an envelope", path.display()))?;
    Ok(view.summary())
}

/// Load a keypair and check that the public file matches the private one.
fn load_keypair(public: &Path, private: &Path) -> anyhow::Result<KeyPair> {
    let public_key = read_key_file(public)?;
    let keypair = KeyPair::from_secret_key(read_key_file(private)?);
    if keypair.public_key != public_key {
        anyhow::bail!(
            "{} does not hold the public key of {}",
            public.display(),
            private.display()
        );
    }
    Ok(keypair)
}

fn print_summary(summary: &EnvelopeSummary) {
    println!("Ciphertext length:   {}", summary.ciphertext_length);
    println!("Plaintext length:    {}", summary.plaintext_length);
    println!("Creator public key:  {}", summary.creator_public_key);
    println!("Creator fingerprint: {}", summary.creator_fingerprint);
    println!("Recipients:          {}", summary.recipient_fingerprints.len());
    for fp in &summary.recipient_fingerprints {
        println!("  {fp}");
    }
}
