use unmangle_core::NodeKind;

use super::test_support::*;
use super::{Printer, PrinterOptions};

fn printer(options: &PrinterOptions) -> Printer<'_> {
    Printer { options }
}

#[test]
fn type_metadata_prints_directness_then_the_type_it_describes() {
    let options = PrinterOptions::default();
    let metadata = node(
        NodeKind::TypeMetadata,
        vec![text(NodeKind::Directness, "direct"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    assert_eq!(printer(&options).print(&metadata), "direct type metadata for Swift.Int");
}

#[test]
fn generic_type_metadata_pattern_prints_directness_then_the_type_it_describes() {
    let options = PrinterOptions::default();
    let pattern = node(
        NodeKind::GenericTypeMetadataPattern,
        vec![text(NodeKind::Directness, "direct"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    assert_eq!(printer(&options).print(&pattern), "direct generic type metadata pattern for Swift.Int");
}

#[test]
fn value_witness_reads_its_own_text_payload_as_the_kind_name() {
    let options = PrinterOptions::default();
    let witness = node_with_text(NodeKind::ValueWitness, "Assign", vec![class("Foo", "Bar")]);
    assert_eq!(printer(&options).print(&witness), "Assign value witness for Foo.Bar");
}

#[test]
fn field_offset_includes_type_by_default() {
    let options = PrinterOptions::default();
    let var = node(
        NodeKind::Variable,
        vec![class("Foo", "Bar"), identifier("x"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    let offset = node(NodeKind::FieldOffset, vec![text(NodeKind::Directness, "indirect"), var]);
    assert_eq!(printer(&options).print(&offset), "indirect field offset for Foo.Bar.x : Swift.Int");
}

#[test]
fn field_offset_suppresses_type_when_the_option_is_off() {
    let options = PrinterOptions { display_type_of_ivar_field_offset: false, ..PrinterOptions::default() };
    let var = node(
        NodeKind::Variable,
        vec![class("Foo", "Bar"), identifier("x"), wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int"))],
    );
    let offset = node(NodeKind::FieldOffset, vec![text(NodeKind::Directness, "indirect"), var]);
    assert_eq!(printer(&options).print(&offset), "indirect field offset for Foo.Bar.x");
}

#[test]
fn partial_apply_forwarder_with_no_entity_prints_the_bare_label() {
    let options = PrinterOptions::default();
    let forwarder = leaf(NodeKind::PartialApplyForwarder);
    assert_eq!(printer(&options).print(&forwarder), "partial apply forwarder");
}

#[test]
fn reabstraction_thunk_prints_the_source_and_destination_types() {
    let options = PrinterOptions::default();
    let thunk = node(
        NodeKind::ReabstractionThunk,
        vec![
            wrap_type(text(NodeKind::BuiltinTypeName, "Swift.Int")),
            wrap_type(text(NodeKind::BuiltinTypeName, "Swift.String")),
        ],
    );
    assert_eq!(printer(&options).print(&thunk), "reabstraction thunk from Swift.Int to Swift.String");
}
