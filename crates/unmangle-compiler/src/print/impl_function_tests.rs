use unmangle_core::NodeKind;

use super::test_support::*;
use super::{Printer, PrinterOptions};

fn printer(options: &PrinterOptions) -> Printer<'_> {
    Printer { options }
}

#[test]
fn callee_convention_alone_prints_an_empty_signature() {
    let options = PrinterOptions::default();
    let impl_fn = node(NodeKind::ImplFunctionType, vec![text(NodeKind::ImplConvention, "@thin")]);
    assert_eq!(printer(&options).print(&impl_fn), "@thin () -> ()");
}

#[test]
fn attributes_are_space_separated_before_the_operand_lists() {
    let options = PrinterOptions::default();
    let impl_fn = node(
        NodeKind::ImplFunctionType,
        vec![
            text(NodeKind::ImplConvention, "@thin"),
            text(NodeKind::ImplFunctionAttribute, "@objc_block"),
            text(NodeKind::ImplFunctionAttribute, "@noreturn"),
        ],
    );
    assert_eq!(printer(&options).print(&impl_fn), "@thin @objc_block @noreturn () -> ()");
}

#[test]
fn a_single_owned_parameter_renders_convention_then_type() {
    let options = PrinterOptions::default();
    let param = node(
        NodeKind::ImplParameter,
        vec![text(NodeKind::ImplConvention, "@owned"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    let impl_fn = node(NodeKind::ImplFunctionType, vec![text(NodeKind::ImplConvention, "@thin"), param]);
    assert_eq!(printer(&options).print(&impl_fn), "@thin (@owned Swift.Int) -> ()");
}

#[test]
fn parameters_and_results_print_as_separate_comma_joined_groups() {
    let options = PrinterOptions::default();
    let int_param = node(
        NodeKind::ImplParameter,
        vec![text(NodeKind::ImplConvention, "@owned"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    let bool_result = node(
        NodeKind::ImplResult,
        vec![text(NodeKind::ImplConvention, "@owned"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Bool"))],
    );
    let impl_fn = node(
        NodeKind::ImplFunctionType,
        vec![text(NodeKind::ImplConvention, "@thin"), int_param, bool_result],
    );
    assert_eq!(printer(&options).print(&impl_fn), "@thin (@owned Swift.Int) -> (@owned Swift.Bool)");
}
