//! Parser and pretty-printer for mangled Swift-style symbols.
//!
//! [`demangle_symbol_as_node`] turns a mangled byte string into an
//! [`OwnedNode`] tree; [`demangle_symbol_as_string`] does the same and
//! immediately pretty-prints it. Neither ever panics: on any internal
//! parse failure the returned tree is a bare [`NodeKind::Failure`] root,
//! and the string API falls back to the raw input bytes.

mod api;
mod cursor;
mod error;
mod parser;
mod print;
mod punycode;
mod tables;

#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod punycode_tests;

pub use api::{demangle_symbol_as_node, demangle_symbol_as_string};
pub use error::ParseError;
pub use print::{node_to_string, PrinterOptions};
pub use unmangle_core::{NodeKind, OwnedNode};
