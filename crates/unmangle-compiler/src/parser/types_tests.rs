use unmangle_core::NodeKind;

use super::Parser;

#[test]
fn builtin_int_size_round_trips_through_the_mnemonic() {
    let mut p = Parser::new(b"Bi32_");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::BuiltinTypeName);
    assert_eq!(p.arena.get(node).payload().as_text(), Some("Builtin.Int32"));
}

#[test]
fn nonvariadic_tuple_collects_elements_until_underscore() {
    let mut p = Parser::new(b"TSiSi_");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::NonVariadicTuple);
    assert_eq!(p.arena.get(node).children().len(), 2);
}

#[test]
fn error_type_requires_the_rr_marker() {
    let mut p = Parser::new(b"ERR");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::ErrorType);

    let mut bad = Parser::new(b"EXX");
    assert!(bad.parse_type().is_err());
}

#[test]
fn bound_generic_picks_the_enum_variant_for_optional() {
    let mut p = Parser::new(b"GSqSi_");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::BoundGenericEnum);
}

#[test]
fn in_out_wraps_its_operand_in_a_type_node() {
    let mut p = Parser::new(b"RSi");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::InOut);
    let children = p.arena.get(node).children();
    assert_eq!(children.len(), 1);
    assert_eq!(p.kind_of(children[0]), NodeKind::Type);
}

#[test]
fn unknown_tag_byte_fails() {
    let mut p = Parser::new(b"Z");
    assert!(p.parse_type().is_err());
}
