//! Human-readable rendering of an argument table.

use argtable_core::{ArgumentTable, Entry, Origin};
use colored::Colorize;

pub fn render_table(table: &ArgumentTable) -> String {
    if table.is_empty() {
        return "(no arguments)".dimmed().to_string();
    }

    let mut out = String::new();
    for key in table.keys() {
        let resolved = match table.resolve_boolean(key) {
            Some(true) => "bool=true".green(),
            _ => "bool=false".red(),
        };
        out.push_str(&format!("{} {}\n", key.bold(), resolved));

        for entry in table.entries(key) {
            out.push_str(&format!("  {}\n", render_entry(entry)));
        }
    }
    out
}

fn render_entry(entry: &Entry) -> String {
    let mut line = format!("{:?}", entry.as_arg());

    if entry.is_negated() {
        line.push_str(&format!(" {}", "negated".yellow()));
    }
    if entry.is_implicit() {
        line.push_str(&format!(" {}", "implicit".dimmed()));
    }
    if entry.origin() == Origin::ConfigFile {
        line.push_str(&format!(" {}", "(config)".cyan()));
    }
    line
}
