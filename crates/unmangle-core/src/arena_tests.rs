use crate::{Arena, NodeKind, Payload};

#[test]
fn create_allocates_a_leaf() {
    let mut arena = Arena::new();
    let id = arena.create(NodeKind::Module);
    assert_eq!(arena.kind_of(id), NodeKind::Module);
    assert!(arena.get(id).payload().is_none());
    assert!(arena.get(id).children().is_empty());
}

#[test]
fn create_with_text_and_index() {
    let mut arena = Arena::new();
    let text = arena.create_with_text(NodeKind::Identifier, "Foo");
    assert_eq!(arena.get(text).payload().as_text(), Some("Foo"));

    let index = arena.create_with_index(NodeKind::Number, 42);
    assert_eq!(arena.get(index).payload().as_index(), Some(42));
}

#[test]
fn add_child_appends_at_the_tail() {
    let mut arena = Arena::new();
    let parent = arena.create(NodeKind::Global);
    let a = arena.create(NodeKind::Module);
    let b = arena.create(NodeKind::Identifier);
    arena.add_child(parent, a);
    arena.add_child(parent, b);
    assert_eq!(arena.get(parent).children(), &[a, b]);
}

#[test]
fn to_owned_tree_duplicates_multiply_referenced_nodes() {
    let mut arena = Arena::new();
    let shared = arena.create_with_text(NodeKind::Module, "Swift");
    let root = arena.create(NodeKind::Global);
    arena.add_child(root, shared);
    arena.add_child(root, shared);

    let owned = arena.to_owned_tree(root);
    assert_eq!(owned.children.len(), 2);
    assert_eq!(owned.children[0], owned.children[1]);
    // Distinct owned copies, not the same allocation — mutating one through
    // the public tree could never affect the other.
    assert_eq!(owned.children[0].text(), Some("Swift"));
}

#[test]
fn create_with_bytes_repairs_invalid_utf8() {
    let mut arena = Arena::new();
    let id = arena.create_with_bytes(NodeKind::Identifier, &[0x66, 0x6f, 0xff, 0x6f]);
    let text = arena.get(id).payload().as_text().unwrap();
    assert!(text.starts_with("fo"));
}

#[test]
fn payload_default_is_none() {
    assert_eq!(Payload::default(), Payload::None);
}
