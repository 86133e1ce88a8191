use unmangle_core::NodeKind;

use super::scalars::ConventionContext;
use super::Parser;

#[test]
fn index_underscore_is_zero_and_natural_underscore_is_offset_by_one() {
    let mut p = Parser::new(b"_3_");
    assert_eq!(p.parse_index().unwrap(), 0);
    assert_eq!(p.parse_index().unwrap(), 4);
}

#[test]
fn builtin_size_requires_trailing_underscore() {
    let mut p = Parser::new(b"32_");
    assert_eq!(p.parse_builtin_size().unwrap(), 32);

    let mut bad = Parser::new(b"32");
    assert!(bad.parse_builtin_size().is_err());
}

#[test]
fn directness_maps_d_and_i() {
    let mut p = Parser::new(b"di");
    let d = p.parse_directness().unwrap();
    assert_eq!(p.kind_of(d), NodeKind::Directness);
    assert_eq!(p.arena.get(d).payload().as_text(), Some("direct"));

    let i = p.parse_directness().unwrap();
    assert_eq!(p.arena.get(i).payload().as_text(), Some("indirect"));
}

#[test]
fn value_witness_kind_decodes_two_byte_codes() {
    let mut p = Parser::new(b"alXX");
    assert_eq!(p.parse_value_witness_kind().unwrap(), "allocateBuffer");
    assert_eq!(p.parse_value_witness_kind().unwrap(), "destroyBuffer");

    let mut bad = Parser::new(b"zz");
    assert!(bad.parse_value_witness_kind().is_err());
}

#[test]
fn impl_convention_depends_on_context() {
    let mut p = Parser::new(b"dd");
    assert_eq!(
        p.parse_impl_convention(ConventionContext::Callee).unwrap(),
        "@callee_unowned"
    );
    assert_eq!(
        p.parse_impl_convention(ConventionContext::Parameter).unwrap(),
        "@unowned"
    );

    let mut result_only = Parser::new(b"a");
    assert_eq!(
        result_only
            .parse_impl_convention(ConventionContext::Result)
            .unwrap(),
        "@autoreleased"
    );
    let mut bad_context = Parser::new(b"a");
    assert!(bad_context
        .parse_impl_convention(ConventionContext::Parameter)
        .is_err());
}
