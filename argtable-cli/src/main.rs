//! argtable command-line entry point.
//!
//! Builds an option table from the tokens given after `--` and either dumps
//! it or answers a single accessor query, so flag spellings can be checked
//! without starting the node.

mod args;
mod render;

use std::path::Path;

use anyhow::{Context, Result, bail};
use argtable_core::{ArgumentTable, ConfigFile};
use clap::Parser;

use args::{Cli, Command, Kind};

/// Stand-in for the program path the table skips
const PROGRAM_NAME: &str = "argtable";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Dump { json, tokens } => {
            let table = build_table(cli.conf.as_deref(), &tokens)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", render::render_table(&table));
            }
        }
        Command::Get {
            key,
            kind,
            default,
            tokens,
        } => {
            let table = build_table(cli.conf.as_deref(), &tokens)?;
            println!("{}", query(&table, &key, kind, default.as_deref())?);
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        "argtable=debug,argtable_core=trace"
    } else {
        "argtable=warn,argtable_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the tokens, merging a config file from `--conf` or, failing that,
/// from a `-conf=` token.
fn build_table(conf: Option<&Path>, tokens: &[String]) -> Result<ArgumentTable> {
    let argv: Vec<&str> = std::iter::once(PROGRAM_NAME)
        .chain(tokens.iter().map(String::as_str))
        .collect();

    let config = match conf {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let bootstrap = ArgumentTable::parse(&argv);
            if bootstrap.has("-conf") {
                let path = bootstrap.config_path("");
                tracing::debug!(path = %path, "using -conf from tokens");
                ConfigFile::load_optional(&path)
                    .with_context(|| format!("Failed to load config {path}"))?
            } else {
                ConfigFile::default()
            }
        }
    };

    Ok(ArgumentTable::parse_with_config(&argv, &config))
}

fn query(table: &ArgumentTable, key: &str, kind: Kind, default: Option<&str>) -> Result<String> {
    let answer = match kind {
        Kind::Bool => {
            let default = match default {
                None | Some("0") | Some("false") => false,
                Some("1") | Some("true") => true,
                Some(other) => bail!("Invalid boolean default: {other}"),
            };
            table.get_bool_arg(key, default).to_string()
        }
        Kind::String => table.get_arg(key, default.unwrap_or("")),
        Kind::Int => {
            let default = match default {
                Some(raw) => raw
                    .parse::<i64>()
                    .with_context(|| format!("Invalid integer default: {raw}"))?,
                None => 0,
            };
            table.get_arg(key, default).to_string()
        }
    };

    Ok(answer)
}
