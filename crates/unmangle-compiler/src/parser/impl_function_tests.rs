use unmangle_core::NodeKind;

use super::Parser;

#[test]
fn callee_convention_with_no_operands_parses_to_an_empty_signature() {
    let mut p = Parser::new(b"XFt___");
    let node = p.parse_type().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::ImplFunctionType);
    let children = p.arena.get(node).children();
    assert_eq!(children.len(), 1);
    assert_eq!(p.kind_of(children[0]), NodeKind::ImplConvention);
    assert_eq!(p.arena.get(children[0]).payload().as_text(), Some("@thin"));
}

#[test]
fn impl_attributes_and_noreturn_accumulate_before_the_operand_lists() {
    let mut p = Parser::new(b"XFtCbN___");
    let node = p.parse_type().unwrap();
    let children = p.arena.get(node).children();
    assert_eq!(children.len(), 3);
    assert_eq!(p.kind_of(children[1]), NodeKind::ImplFunctionAttribute);
    assert_eq!(p.arena.get(children[1]).payload().as_text(), Some("@objc_block"));
    assert_eq!(p.kind_of(children[2]), NodeKind::ImplFunctionAttribute);
    assert_eq!(p.arena.get(children[2]).payload().as_text(), Some("@noreturn"));
}

#[test]
fn a_single_owned_parameter_is_attached_with_its_convention_and_type() {
    let mut p = Parser::new(b"XFt_oSi__");
    let node = p.parse_type().unwrap();
    let children = p.arena.get(node).children();
    assert_eq!(children.len(), 2);
    assert_eq!(p.kind_of(children[1]), NodeKind::ImplParameter);
    let param_children = p.arena.get(children[1]).children();
    assert_eq!(param_children.len(), 2);
    assert_eq!(p.kind_of(param_children[0]), NodeKind::ImplConvention);
    assert_eq!(p.arena.get(param_children[0]).payload().as_text(), Some("@owned"));
    assert_eq!(p.kind_of(param_children[1]), NodeKind::Type);
}

#[test]
fn truncated_input_after_the_callee_convention_fails() {
    let mut p = Parser::new(b"XFt");
    assert!(p.parse_type().is_err());
}
