//! Parser for command line arguments.
//!
//! Turns raw tokens into canonical entries of an [`ArgumentTable`]. Nothing
//! here can fail: malformed tokens are recorded as-is and left for the
//! accessors to coerce.

use crate::table::{ArgumentTable, Entry, Origin, strip_dashes};

/// Prefix marking the negated spelling of a flag (`-nofoo`)
pub const NEGATION_PREFIX: &str = "no";

/// One flag token broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// Canonical key of the positive flag
    pub key: String,
    /// Text after the first `=`, if any
    pub value: Option<&'a str>,
    /// True when written with the `no` prefix
    pub negated: bool,
}

impl ParsedToken<'_> {
    pub(crate) fn into_entry(self, origin: Origin) -> (String, Entry) {
        let entry = if self.negated {
            Entry::negated(self.value, origin)
        } else {
            Entry::positive(self.value, origin)
        };
        (self.key, entry)
    }
}

/// Split a flag name (with or without leading dashes) and an optional
/// value into canonical parts. One leading `--` or `-` is removed and a
/// single `-` put back, so `---name` keys as `--name`.
pub fn classify<'a>(name: &str, value: Option<&'a str>) -> ParsedToken<'a> {
    let bare = strip_dashes(name);

    match bare.strip_prefix(NEGATION_PREFIX) {
        Some(positive) => ParsedToken {
            key: format!("-{positive}"),
            value,
            negated: true,
        },
        None => ParsedToken {
            key: format!("-{bare}"),
            value,
            negated: false,
        },
    }
}

/// Parse a single token. Returns `None` for anything that is not a flag.
///
/// Handles:
/// - `-name` and `--name`
/// - `-name=value` and `--name=value` (split at the first `=`)
/// - `-noname[=value]` as the negated spelling of `-name`
pub fn parse_token(token: &str) -> Option<ParsedToken<'_>> {
    if !token.starts_with('-') {
        return None;
    }

    let (name, value) = match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    };

    Some(classify(name, value))
}

/// Parse a full argument vector into an [`ArgumentTable`].
///
/// The first element is the program path and is skipped. Scanning stops at
/// the first token that does not start with `-`; positional arguments are
/// not part of the table.
pub fn parse_args<I, S>(args: I) -> ArgumentTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ArgumentTable::new();
    record_tokens(&mut table, args.into_iter().skip(1));

    tracing::debug!(keys = table.len(), "parsed argument vector");
    table
}

impl ArgumentTable {
    /// See [`parse_args`].
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_args(args)
    }

    /// Build the table from this process's own argument vector.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        parse_args(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }
}

fn record_tokens<I, S>(table: &mut ArgumentTable, tokens: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for token in tokens {
        let token = token.as_ref();

        let Some(parsed) = parse_token(token) else {
            tracing::debug!(token, "stopping at positional argument");
            break;
        };

        let (key, entry) = parsed.into_entry(Origin::CommandLine);
        table.record(key, entry);
    }
}
