use unmangle_core::NodeKind;

use super::archetypes::encode_base26;
use super::Parser;

#[test]
fn base26_encoding_is_least_significant_digit_first() {
    assert_eq!(encode_base26(0), "A");
    assert_eq!(encode_base26(25), "Z");
    assert_eq!(encode_base26(26), "AB");
    assert_eq!(encode_base26(27), "BB");
}

#[test]
fn bare_index_looks_up_depth_zero() {
    let mut p = Parser::new(b"Q_");
    p.archetype_counts.push(0);
    let node = p.parse_archetype().unwrap();
    assert_eq!(p.kind_of(node), NodeKind::ArchetypeRef);
    assert_eq!(p.arena.get(node).payload().as_text(), Some("A"));
}

#[test]
fn depth_beyond_the_stack_is_out_of_range() {
    let mut p = Parser::new(b"Qd__");
    assert!(p.parse_archetype().is_err());
}
