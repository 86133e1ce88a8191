use unmangle_core::NodeKind;

use super::Parser;

#[test]
fn one_letter_codes_resolve_builtin_modules_and_types() {
    let mut p = Parser::new(b"i");
    let node = p.parse_substitution_index().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::Structure);
    assert_eq!(p.arena.get(node).children().len(), 2);
}

#[test]
fn bare_module_code_has_no_declaration_wrapper() {
    let mut p = Parser::new(b"s");
    let node = p.parse_substitution_index().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::Module);
}

#[test]
fn underscore_selects_the_first_table_entry() {
    let mut p = Parser::new(b"_");
    let first = p.create(NodeKind::Module);
    p.push_substitution(first);
    let resolved = p.parse_substitution_index().unwrap();
    assert_eq!(resolved, first);
}

#[test]
fn out_of_range_index_fails() {
    let mut p = Parser::new(b"A");
    assert!(p.parse_substitution_index().is_err());
}
