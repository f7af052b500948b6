//! Config-file settings merged into the table at construction time.
//!
//! The file is flat TOML. Each top-level key is a flag name without its
//! leading dash:
//!
//! ```toml
//! rpcport = 8332
//! server = true
//! nolisten = true
//! addnode = ["10.0.0.1", "10.0.0.2"]
//! ```
//!
//! Values from the command line always shadow values from the file for the
//! same key.

use std::path::Path;
use std::str::FromStr;

use toml::Value;

use crate::args_processor::{classify, parse_args};
use crate::error::{Error, Result};
use crate::table::{ArgumentTable, Origin};

/// Settings read from a config file, flattened to `(name, value)` pairs
/// sorted by name. Array elements keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    settings: Vec<(String, String)>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading config file");
        content.parse()
    }

    /// Like [`ConfigFile::load`], but a missing file yields an empty config.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, skipping");
            Ok(Self::default())
        }
    }

    /// Flattened settings, one per recorded value.
    pub fn settings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    fn merge_into(&self, table: &mut ArgumentTable) {
        for (name, value) in &self.settings {
            let (key, entry) =
                classify(name, Some(value.as_str())).into_entry(Origin::ConfigFile);
            table.record(key, entry);
        }
        tracing::debug!(settings = self.settings.len(), "merged config file");
    }
}

impl FromStr for ConfigFile {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let document: toml::Table = toml::from_str(content)?;
        let mut settings = Vec::new();

        for (name, value) in document {
            match value {
                Value::Array(items) => {
                    for item in items {
                        let rendered = render_scalar(&name, item)?;
                        settings.push((name.clone(), rendered));
                    }
                }
                other => {
                    let rendered = render_scalar(&name, other)?;
                    settings.push((name, rendered));
                }
            }
        }

        Ok(Self { settings })
    }
}

fn render_scalar(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(if b { "1" } else { "0" }.to_string()),
        other => Err(Error::UnsupportedConfigValue {
            key: name.to_string(),
            kind: other.type_str(),
        }),
    }
}

impl ArgumentTable {
    /// Parse the argument vector and fold in settings from a config file.
    pub fn parse_with_config<I, S>(args: I, config: &ConfigFile) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = parse_args(args);
        config.merge_into(&mut table);
        table
    }
}
