//! The publicly owned demangling tree returned by the top-level API.

use crate::kind::NodeKind;
use crate::payload::Payload;

/// A fully owned node in a demangling tree.
///
/// Unlike the arena's [`Node`](crate::Node), an `OwnedNode` owns its
/// children directly (no arena, no handles) — this is the shape callers of
/// `demangle_symbol_as_node` get back. A `Global` node is always the root
/// of a successful demangling; a `Failure` node (no payload, no children)
/// is always the root of a failed one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OwnedNode {
    pub kind: NodeKind,
    pub payload: Payload,
    pub children: Vec<OwnedNode>,
}

impl OwnedNode {
    pub fn leaf(kind: NodeKind) -> Self {
        OwnedNode {
            kind,
            payload: Payload::None,
            children: Vec::new(),
        }
    }

    pub fn failure() -> Self {
        OwnedNode::leaf(NodeKind::Failure)
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NodeKind::Failure
    }

    /// True if this node or any descendant is a [`NodeKind::Failure`] —
    /// should never hold for the tree `demangle_symbol_as_node` returns on
    /// success.
    pub fn contains_failure(&self) -> bool {
        self.is_failure() || self.children.iter().any(OwnedNode::contains_failure)
    }

    pub fn text(&self) -> Option<&str> {
        self.payload.as_text()
    }

    pub fn index(&self) -> Option<u64> {
        self.payload.as_index()
    }
}
