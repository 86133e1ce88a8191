//! Demangle one or more symbols, printed or dumped as JSON.

use std::io::{self, Read};

use unmangle_compiler::{demangle_symbol_as_node, demangle_symbol_as_string, PrinterOptions};

pub struct DemangleArgs {
    pub symbols: Vec<String>,
    pub no_sugar: bool,
    pub hide_field_offset_type: bool,
    pub json: bool,
}

pub fn run(args: DemangleArgs) {
    let symbols = if args.symbols.is_empty() {
        read_symbols_from_stdin()
    } else {
        args.symbols
    };

    let options = PrinterOptions {
        synthesize_sugar_on_types: !args.no_sugar,
        display_type_of_ivar_field_offset: !args.hide_field_offset_type,
    };

    for symbol in symbols {
        if args.json {
            let node = demangle_symbol_as_node(symbol.as_bytes());
            match serde_json::to_string(&node) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to serialize tree for '{symbol}': {e}");
                    std::process::exit(1);
                }
            }
        } else {
            println!("{}", demangle_symbol_as_string(symbol.as_bytes(), options));
        }
    }
}

/// Reads stdin to completion and splits it into whitespace-separated
/// tokens, one symbol per token.
fn read_symbols_from_stdin() -> Vec<String> {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("error: failed to read stdin: {e}");
        std::process::exit(1);
    }
    buf.split_whitespace().map(str::to_string).collect()
}
