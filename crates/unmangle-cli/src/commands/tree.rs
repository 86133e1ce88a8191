//! Print the raw demangling tree of a symbol for manual inspection.

use unmangle_compiler::demangle_symbol_as_node;

pub struct TreeArgs {
    pub symbol: String,
}

pub fn run(args: TreeArgs) {
    let node = demangle_symbol_as_node(args.symbol.as_bytes());
    println!("{node:#?}");
}
