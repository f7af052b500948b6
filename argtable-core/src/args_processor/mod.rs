//! Command argument processing functionality.
//!
//! This module turns a raw argument vector into an [`crate::ArgumentTable`],
//! normalizing `-flag`/`--flag` spellings and the `-noflag` negation.

mod parser;

pub use parser::{NEGATION_PREFIX, ParsedToken, classify, parse_args, parse_token};
