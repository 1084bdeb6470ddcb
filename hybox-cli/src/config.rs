use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hybox", about = "Multi-recipient envelope encryption", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a keypair and write NAME_public.key / NAME_private.key
    Keygen {
        /// Directory to write the key files into
        #[arg(long)]
        out_dir: PathBuf,
        /// Base name for the key files
        #[arg(long)]
        name: String,
        /// Comment appended to the public key text
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Print the hex fingerprint of a public key file
    Fingerprint {
        /// Public key file
        keyfile: PathBuf,
    },
    /// Encrypt a file for one or more recipients
    Encrypt {
        /// Plaintext file
        #[arg(long)]
        input: PathBuf,
        /// Where to write the envelope
        #[arg(long)]
        output: PathBuf,
        /// Creator public key file
        #[arg(long)]
        public: PathBuf,
        /// Creator private key file
        #[arg(long)]
        private: PathBuf,
        /// Recipient public key file (repeatable)
        #[arg(long = "recipient")]
        recipients: Vec<PathBuf>,
        /// Derive the symmetric key with PBKDF2 instead of drawing it directly
        #[arg(long)]
        stretch_key: bool,
    },
    /// Decrypt an envelope addressed to this keypair
    Decrypt {
        /// Envelope file
        #[arg(long)]
        input: PathBuf,
        /// Where to write the plaintext
        #[arg(long)]
        output: PathBuf,
        /// Own public key file
        #[arg(long)]
        public: PathBuf,
        /// Own private key file
        #[arg(long)]
        private: PathBuf,
    },
    /// Show envelope metadata without decrypting
    Inspect {
        /// Envelope file
        blob: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
