use clap::Parser;

use super::cli::{Cli, Command};

#[test]
fn demangle_collects_every_positional_symbol() {
    let cli = Cli::try_parse_from(["unmangle", "demangle", "_TF3foo3barFSiSi", "_TTo_T"])
        .expect("both symbols should parse");
    let Command::Demangle { symbols, no_sugar, hide_field_offset_type, json } = cli.command else {
        panic!("expected the demangle subcommand");
    };
    assert_eq!(symbols, vec!["_TF3foo3barFSiSi", "_TTo_T"]);
    assert!(!no_sugar);
    assert!(!hide_field_offset_type);
    assert!(!json);
}

#[test]
fn demangle_with_no_positionals_leaves_symbols_empty() {
    let cli = Cli::try_parse_from(["unmangle", "demangle"]).expect("no symbols is valid, falls back to stdin");
    let Command::Demangle { symbols, .. } = cli.command else {
        panic!("expected the demangle subcommand");
    };
    assert!(symbols.is_empty());
}

#[test]
fn demangle_accepts_the_configuration_flags() {
    let cli = Cli::try_parse_from([
        "unmangle",
        "demangle",
        "--no-sugar",
        "--hide-field-offset-type",
        "--json",
        "_Tv3Foo1xSi",
    ])
    .expect("flags should parse");
    let Command::Demangle { symbols, no_sugar, hide_field_offset_type, json } = cli.command else {
        panic!("expected the demangle subcommand");
    };
    assert!(no_sugar);
    assert!(hide_field_offset_type);
    assert!(json);
    assert_eq!(symbols, vec!["_Tv3Foo1xSi"]);
}

#[test]
fn tree_requires_exactly_one_symbol() {
    assert!(Cli::try_parse_from(["unmangle", "tree"]).is_err());

    let cli = Cli::try_parse_from(["unmangle", "tree", "_TF3foo3barFSiSi"]).expect("a single symbol should parse");
    let Command::Tree { symbol } = cli.command else {
        panic!("expected the tree subcommand");
    };
    assert_eq!(symbol, "_TF3foo3barFSiSi");
}
