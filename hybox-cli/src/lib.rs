//! Hybox CLI: key files and envelope files on top of `hybox-core`.

pub mod commands;
pub mod config;
pub mod keyfile;
