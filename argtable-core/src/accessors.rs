//! Typed lookups over an [`ArgumentTable`].
//!
//! Every accessor takes a caller-supplied default that applies only when the
//! key is entirely absent. A present key never falls back to the default:
//! a non-numeric value read as an integer is `0`, and a bare `-flag` read as
//! a string is empty.

use crate::table::{ArgumentTable, Entry};

/// A default value that also selects how the key is read.
///
/// Lets [`ArgumentTable::get_arg`] take either a string or an integer
/// default, mirroring the string and integer accessors.
pub trait ArgDefault {
    type Output;

    fn resolve(self, table: &ArgumentTable, key: &str) -> Self::Output;
}

impl ArgDefault for &str {
    type Output = String;

    fn resolve(self, table: &ArgumentTable, key: &str) -> String {
        table.get_string_arg(key, self)
    }
}

impl ArgDefault for String {
    type Output = String;

    fn resolve(self, table: &ArgumentTable, key: &str) -> String {
        table.get_string_arg(key, &self)
    }
}

impl ArgDefault for i64 {
    type Output = i64;

    fn resolve(self, table: &ArgumentTable, key: &str) -> i64 {
        table.get_int_arg(key, self)
    }
}

impl ArgDefault for i32 {
    type Output = i64;

    fn resolve(self, table: &ArgumentTable, key: &str) -> i64 {
        table.get_int_arg(key, i64::from(self))
    }
}

impl ArgumentTable {
    /// Boolean value of the key, or `default` if it was never given.
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.resolve_boolean(key).unwrap_or(default)
    }

    /// Shorthand for `get_bool_arg(key, false)`.
    pub fn is_set(&self, key: &str) -> bool {
        self.get_bool_arg(key, false)
    }

    /// String or integer value of the key, depending on the default's type.
    pub fn get_arg<D: ArgDefault>(&self, key: &str, default: D) -> D::Output {
        default.resolve(self, key)
    }

    /// Last value given for the key, or `default` if it was never given.
    ///
    /// A flag given without `=value` reads as the empty string.
    pub fn get_string_arg(&self, key: &str, default: &str) -> String {
        match self.last_entry(key) {
            Some(entry) => entry.as_arg().to_string(),
            None => default.to_string(),
        }
    }

    /// Last value given for the key parsed as an integer, or `default` if it
    /// was never given. Values without a leading number read as `0`.
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        match self.last_entry(key) {
            Some(entry) => parse_int(entry.as_arg()),
            None => default,
        }
    }

    /// Every value given for the key, command line first.
    pub fn get_args(&self, key: &str) -> Vec<String> {
        self.entries(key)
            .iter()
            .map(Entry::as_arg)
            .map(str::to_string)
            .collect()
    }

    /// Path of the config file named by `-conf`, or `default`.
    pub fn config_path(&self, default: &str) -> String {
        self.get_string_arg("-conf", default)
    }
}

/// Lenient integer parse in the manner of `atoi64`: optional leading
/// whitespace and sign, then as many digits as are present. No digits gives
/// `0`; overflow saturates.
pub fn parse_int(value: &str) -> i64 {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_args;

    #[test]
    fn parse_int_reads_leading_number() {
        assert_eq!(parse_int("11"), 11);
        assert_eq!(parse_int("  -42"), -42);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("12abc"), 12);
        assert_eq!(parse_int("NaN"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
    }

    #[test]
    fn parse_int_skips_only_ascii_whitespace() {
        assert_eq!(parse_int("\t\n 5"), 5);
        assert_eq!(parse_int("\u{3000}5"), 0);
    }

    #[test]
    fn parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_int("-99999999999999999999999"), i64::MIN);
        assert_eq!(parse_int("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn get_arg_dispatches_on_default_type() {
        let table = parse_args(["prog", "-port=8333", "-name=alice"]);
        assert_eq!(table.get_arg("-port", 0), 8333i64);
        assert_eq!(table.get_arg("-port", 0i64), 8333);
        assert_eq!(table.get_arg("-name", ""), "alice");
        assert_eq!(table.get_arg("-missing", String::from("x")), "x");
    }

    #[test]
    fn negated_flag_reads_as_zero_string() {
        let table = parse_args(["prog", "-nolisten"]);
        assert_eq!(table.get_string_arg("-listen", "x"), "0");
        assert_eq!(table.get_int_arg("-listen", 5), 0);

        let table = parse_args(["prog", "-nolisten=0"]);
        assert_eq!(table.get_int_arg("-listen", 5), 1);
    }

    #[test]
    fn get_args_lists_every_value() {
        let table = parse_args(["prog", "-addnode=a", "-addnode=b", "-addnode"]);
        assert_eq!(table.get_args("-addnode"), vec!["a", "b", ""]);
        assert!(table.get_args("-connect").is_empty());
    }

    #[test]
    fn is_set_defaults_to_false() {
        let table = parse_args(["prog", "-debug"]);
        assert!(table.is_set("-debug"));
        assert!(!table.is_set("-server"));
    }

    #[test]
    fn config_path_reads_conf_flag() {
        let table = parse_args(["prog", "-conf=/etc/node.toml"]);
        assert_eq!(table.config_path("node.toml"), "/etc/node.toml");
        assert_eq!(parse_args(["prog"]).config_path("node.toml"), "node.toml");
    }
}
