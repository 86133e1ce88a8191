mod cli;
mod commands;

#[cfg(test)]
mod cli_tests;

use clap::Parser;

use cli::{Cli, Command};
use commands::demangle::DemangleArgs;
use commands::tree::TreeArgs;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Demangle { symbols, no_sugar, hide_field_offset_type, json } => {
            commands::demangle::run(DemangleArgs { symbols, no_sugar, hide_field_offset_type, json });
        }
        Command::Tree { symbol } => {
            commands::tree::run(TreeArgs { symbol });
        }
    }
}
