use crate::{NodeKind, OwnedNode, Payload};

#[test]
fn failure_has_no_payload_and_no_children() {
    let node = OwnedNode::failure();
    assert!(node.is_failure());
    assert_eq!(node.payload, Payload::None);
    assert!(node.children.is_empty());
}

#[test]
fn contains_failure_is_recursive() {
    let mut global = OwnedNode::leaf(NodeKind::Global);
    let mut function = OwnedNode::leaf(NodeKind::Function);
    function.children.push(OwnedNode::failure());
    global.children.push(function);

    assert!(global.contains_failure());
    assert!(!OwnedNode::leaf(NodeKind::Global).contains_failure());
}

#[test]
fn json_round_trip_preserves_kind_and_text() {
    let mut node = OwnedNode::leaf(NodeKind::Identifier);
    node.payload = Payload::text("bar");
    let json = serde_json::to_string(&node).unwrap();
    let back: OwnedNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
