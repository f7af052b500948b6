//! The option table produced by a single parse of the argument vector.
//!
//! Every occurrence of a flag is kept, in scan order, under its canonical
//! key. Boolean resolution looks at the whole history of a key rather than
//! just its last write, so `-foo -nofoo` and `-nofoo -foo` agree.

use std::collections::BTreeMap;

use serde::Serialize;

/// Implicit value recorded for a flag given without `=value`
pub const IMPLICIT_VALUE: &str = "1";

/// Where a recorded entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    CommandLine,
    ConfigFile,
}

/// One recorded occurrence of a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    value: String,
    negated: bool,
    implicit: bool,
    origin: Origin,
}

impl Entry {
    /// A positive-spelling occurrence. `None` records the implicit value.
    pub(crate) fn positive(value: Option<&str>, origin: Origin) -> Self {
        Self {
            value: value.unwrap_or(IMPLICIT_VALUE).to_string(),
            negated: false,
            implicit: value.is_none(),
            origin,
        }
    }

    /// A `no`-prefixed occurrence, stored under the positive key with its
    /// meaning already inverted: `-nofoo` and `-nofoo=1` record `"0"`,
    /// `-nofoo=0` records `"1"`.
    pub(crate) fn negated(value: Option<&str>, origin: Origin) -> Self {
        let inverted = match value {
            Some(given) if !is_truthy(given) => "1",
            _ => "0",
        };
        Self {
            value: inverted.to_string(),
            negated: true,
            implicit: value.is_none(),
            origin,
        }
    }

    /// The recorded value. Implicit occurrences read as `"1"` here.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when written with the `no` prefix.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// True when the token carried no `=value` suffix.
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Command line or config file.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The value as the string accessors report it. A positive flag given
    /// without `=value` yields the empty string, not `"1"`.
    pub fn as_arg(&self) -> &str {
        if self.implicit && !self.negated {
            ""
        } else {
            &self.value
        }
    }
}

/// `"0"` is false, every other value (the empty string included) is true.
pub fn is_truthy(value: &str) -> bool {
    value != "0"
}

/// Collapse `--name`, `-name` and `name` into `-name`.
///
/// Only one leading `--` or `-` is removed, so `---name` becomes `--name`.
pub fn canonical_key(name: &str) -> String {
    format!("-{}", strip_dashes(name))
}

pub(crate) fn strip_dashes(name: &str) -> &str {
    name.strip_prefix("--")
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name)
}

/// Ordered, multi-valued mapping from canonical key to recorded entries.
///
/// Built once by [`crate::parse_args`] (optionally merged with a
/// [`crate::ConfigFile`]) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentTable {
    entries: BTreeMap<String, Vec<Entry>>,
}

impl ArgumentTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an entry under an already-canonical key.
    pub(crate) fn record(&mut self, key: String, entry: Entry) {
        tracing::trace!(
            key = %key,
            value = %entry.value,
            negated = entry.negated,
            origin = ?entry.origin,
            "recorded argument"
        );
        self.entries.entry(key).or_default().push(entry);
    }

    /// True if any occurrence, positive or negated, exists for the key.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(&canonical_key(key))
    }

    /// Every recorded entry for the key, command line first.
    pub fn entries(&self, key: &str) -> &[Entry] {
        self.entries
            .get(&canonical_key(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Canonical keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no flag was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that take part in single-value resolution. Command-line
    /// entries shadow config-file entries for the same key.
    fn effective(&self, key: &str) -> Vec<&Entry> {
        let all = self.entries(key);
        let from_command_line: Vec<&Entry> = all
            .iter()
            .filter(|e| e.origin == Origin::CommandLine)
            .collect();

        if from_command_line.is_empty() {
            all.iter().collect()
        } else {
            from_command_line
        }
    }

    /// Resolve the key as a boolean.
    ///
    /// The last positive-spelling entry decides if there is one, wherever it
    /// sits relative to negated entries. Otherwise the last negated entry
    /// decides. `None` when the key is absent.
    pub fn resolve_boolean(&self, key: &str) -> Option<bool> {
        let effective = self.effective(key);

        effective
            .iter()
            .rev()
            .find(|e| !e.negated)
            .or_else(|| effective.last())
            .map(|e| is_truthy(&e.value))
    }

    /// The last effective entry for the key, regardless of spelling.
    pub fn last_entry(&self, key: &str) -> Option<&Entry> {
        self.effective(key).last().copied()
    }

    /// The value of the last effective entry for the key.
    pub fn last_raw_value(&self, key: &str) -> Option<&str> {
        self.last_entry(key).map(Entry::value)
    }
}
