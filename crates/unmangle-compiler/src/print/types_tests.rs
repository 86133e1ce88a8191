use unmangle_core::NodeKind;

use super::test_support::*;
use super::{Printer, PrinterOptions};

fn printer(options: &PrinterOptions) -> Printer<'_> {
    Printer { options }
}

fn swift_int() -> unmangle_core::OwnedNode {
    text(NodeKind::BuiltinTypeName, "Swift.Int")
}

#[test]
fn optional_bound_generic_gets_question_mark_sugar() {
    let options = PrinterOptions::default();
    let optional = node(
        NodeKind::BoundGenericEnum,
        vec![enum_type("Swift", "Optional"), node(NodeKind::TypeList, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&optional), "Swift.Int?");
}

#[test]
fn sugar_is_suppressed_when_disabled() {
    let options = PrinterOptions { synthesize_sugar_on_types: false, ..PrinterOptions::default() };
    let optional = node(
        NodeKind::BoundGenericEnum,
        vec![enum_type("Swift", "Optional"), node(NodeKind::TypeList, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&optional), "Swift.Optional<Swift.Int>");
}

#[test]
fn array_bound_generic_gets_bracket_sugar() {
    let options = PrinterOptions::default();
    let array = node(
        NodeKind::BoundGenericStructure,
        vec![structure("Swift", "Array"), node(NodeKind::TypeList, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&array), "[Swift.Int]");
}

#[test]
fn bound_generic_class_never_gets_sugar_even_if_named_optional() {
    let options = PrinterOptions::default();
    let fake = node(
        NodeKind::BoundGenericClass,
        vec![enum_type("Swift", "Optional"), node(NodeKind::TypeList, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&fake), "Swift.Optional<Swift.Int>");
}

#[test]
fn non_stdlib_optional_shaped_enum_falls_back_to_angle_brackets() {
    let options = PrinterOptions::default();
    let not_stdlib = node(
        NodeKind::BoundGenericEnum,
        vec![structure("MyModule", "Optional"), node(NodeKind::TypeList, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&not_stdlib), "MyModule.Optional<Swift.Int>");
}

#[test]
fn argument_tuple_parenthesizes_a_non_tuple_operand() {
    let options = PrinterOptions::default();
    let args = node(NodeKind::ArgumentTuple, vec![wrap_type(swift_int())]);
    assert_eq!(printer(&options).print(&args), "(Swift.Int)");
}

#[test]
fn argument_tuple_does_not_double_parenthesize_an_already_tupled_operand() {
    let options = PrinterOptions::default();
    let tuple = node(NodeKind::NonVariadicTuple, vec![node(NodeKind::TupleElement, vec![wrap_type(swift_int())])]);
    let args = node(NodeKind::ArgumentTuple, vec![wrap_type(tuple)]);
    assert_eq!(printer(&options).print(&args), "(Swift.Int)");
}

#[test]
fn variadic_tuple_appends_ellipsis_to_the_last_element() {
    let options = PrinterOptions::default();
    let tuple = node(
        NodeKind::VariadicTuple,
        vec![node(NodeKind::TupleElement, vec![wrap_type(swift_int())])],
    );
    assert_eq!(printer(&options).print(&tuple), "(Swift.Int...)");
}

#[test]
fn function_type_joins_argument_tuple_and_return_type() {
    let options = PrinterOptions::default();
    let function = node(
        NodeKind::FunctionType,
        vec![
            node(NodeKind::ArgumentTuple, vec![wrap_type(swift_int())]),
            node(NodeKind::ReturnType, vec![swift_int()]),
        ],
    );
    assert_eq!(printer(&options).print(&function), "(Swift.Int) -> Swift.Int");
}

#[test]
fn metatype_uses_dot_type_for_a_concrete_operand() {
    let options = PrinterOptions::default();
    let metatype = node(NodeKind::Metatype, vec![wrap_type(swift_int())]);
    assert_eq!(printer(&options).print(&metatype), "Swift.Int.Type");
}

#[test]
fn in_out_prints_with_a_leading_keyword() {
    let options = PrinterOptions::default();
    let in_out = node(NodeKind::InOut, vec![wrap_type(swift_int())]);
    assert_eq!(printer(&options).print(&in_out), "inout Swift.Int");
}
