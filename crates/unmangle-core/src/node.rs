//! Arena-resident nodes, referenced by [`NodeId`] handles.

use crate::kind::NodeKind;
use crate::payload::Payload;

/// A handle into an [`Arena`](crate::Arena).
///
/// Cheap to copy and compare; stable for the lifetime of the arena it was
/// issued from. Substitution-table entries and child lists both store
/// `NodeId`s rather than owned nodes, which is how a single parsed
/// declaration can be referenced from multiple positions in the tree
/// without giving every node a reference count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node as it lives in the arena: a kind, a payload, and an ordered list
/// of child handles. Payload kind is fixed at construction.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    payload: Payload,
    children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            payload: Payload::None,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_payload(kind: NodeKind, payload: Payload) -> Self {
        Node {
            kind,
            payload,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
