//! Error types for the argument table.
//!
//! Parsing and lookups never fail; only loading a config file does.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigSyntax(#[from] toml::de::Error),

    /// A config entry whose TOML type has no flag representation
    #[error("Unsupported value for config key {key}: {kind}")]
    UnsupportedConfigValue { key: String, kind: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
