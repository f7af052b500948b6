use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for the argtable inspector
#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect how an argument vector resolves into an option table")]
pub struct Cli {
    /// TOML config file to merge under the parsed tokens
    #[arg(long, global = true)]
    pub conf: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every key with its recorded entries
    Dump {
        /// Output raw JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Tokens to parse, as they would follow the program path
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Resolve a single key through one of the typed accessors
    Get {
        /// Key to look up, e.g. -rpcport
        #[arg(allow_hyphen_values = true)]
        key: String,

        /// Accessor to use
        #[arg(long, value_enum, default_value_t = Kind::String)]
        kind: Kind,

        /// Default returned when the key is absent
        #[arg(long, allow_hyphen_values = true)]
        default: Option<String>,

        /// Tokens to parse, as they would follow the program path
        #[arg(last = true)]
        tokens: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    String,
    Int,
}
