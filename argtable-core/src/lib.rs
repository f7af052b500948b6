//! Typed option table for a node's command line.
//!
//! This crate turns a process argument vector into an immutable
//! [`ArgumentTable`]. `-flag` and `--flag` share one canonical key, every
//! occurrence is kept in order, `-noflag` negates `-flag`, and typed
//! accessors apply caller-supplied defaults with permissive coercion.
//!
//! ```
//! use argtable_core::ArgumentTable;
//!
//! let args = ArgumentTable::parse(["node", "-server", "--rpcport=8332", "-nolisten"]);
//! assert!(args.get_bool_arg("-server", false));
//! assert!(!args.get_bool_arg("-listen", true));
//! assert_eq!(args.get_arg("-rpcport", 0), 8332i64);
//! assert_eq!(args.get_arg("-datadir", "/var/lib/node"), "/var/lib/node");
//! ```

mod accessors;
pub mod args_processor;
mod config;
mod error;
mod table;

pub use accessors::{ArgDefault, parse_int};
pub use args_processor::parse_args;
pub use config::ConfigFile;
pub use error::{Error, Result};
pub use table::{ArgumentTable, Entry, IMPLICIT_VALUE, Origin, canonical_key, is_truthy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
