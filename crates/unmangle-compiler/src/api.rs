//! Top-level entry points.

use unmangle_core::OwnedNode;

use crate::parser::Parser;
use crate::print::{self, PrinterOptions};

/// Parses `input` into a demangling tree. Never panics, even on empty
/// input — a malformed or unrecognized mangling simply yields a bare
/// [`unmangle_core::NodeKind::Failure`] root.
pub fn demangle_symbol_as_node(input: &[u8]) -> OwnedNode {
    Parser::new(input).demangle()
}

/// Parses and pretty-prints `input`. Falls back to a lossy UTF-8 view of
/// the raw input — rather than an empty string — whenever parsing fails
/// or the printer produces nothing, so callers always get a displayable
/// string back.
pub fn demangle_symbol_as_string(input: &[u8], options: PrinterOptions) -> String {
    let node = demangle_symbol_as_node(input);
    if node.is_failure() {
        return String::from_utf8_lossy(input).into_owned();
    }
    let printed = print::node_to_string(&node, &options);
    if printed.is_empty() {
        String::from_utf8_lossy(input).into_owned()
    } else {
        printed
    }
}
