use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unmangle", bin_name = "unmangle")]
#[command(about = "Demangler for mangled Swift-style symbols")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Demangle one or more symbols
    #[command(after_help = r#"EXAMPLES:
  unmangle demangle _TF3foo3barFSiSi          # single symbol
  unmangle demangle _TF3foo3barFSiSi _TTo_T   # several symbols
  echo _TF3foo3barFSiSi | unmangle demangle   # read from stdin
  unmangle demangle --json _TF3foo3barFSiSi   # dump the tree as JSON"#)]
    Demangle {
        /// Mangled symbols (reads whitespace-separated tokens from stdin if omitted)
        #[arg(value_name = "SYMBOLS")]
        symbols: Vec<String>,

        /// Print Optional<T>/Array<T>/... instead of T?/[T]/...
        #[arg(long)]
        no_sugar: bool,

        /// Omit the ivar type from field offset output
        #[arg(long)]
        hide_field_offset_type: bool,

        /// Print the demangling tree as JSON instead of the printed string
        #[arg(long)]
        json: bool,
    },

    /// Print the raw demangling tree of a symbol
    #[command(after_help = "EXAMPLE:\n  unmangle tree _TF3foo3barFSiSi")]
    Tree {
        /// Mangled symbol
        #[arg(value_name = "SYMBOL")]
        symbol: String,
    },
}
