//! The node arena: owns every [`Node`](crate::Node) allocated during a parse.

use crate::kind::NodeKind;
use crate::node::{Node, NodeId};
use crate::owned::OwnedNode;
use crate::payload::Payload;

/// Allocates and owns nodes for a single demangling. Dropped as a unit once
/// the caller has lowered the tree it wants out of it.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        self.push(Node::new(kind))
    }

    pub fn create_with_text(&mut self, kind: NodeKind, text: impl Into<Box<str>>) -> NodeId {
        self.push(Node::with_payload(kind, Payload::Text(text.into())))
    }

    pub fn create_with_bytes(&mut self, kind: NodeKind, bytes: &[u8]) -> NodeId {
        self.push(Node::with_payload(kind, Payload::text_from_bytes(bytes)))
    }

    pub fn create_with_index(&mut self, kind: NodeKind, index: u64) -> NodeId {
        self.push(Node::with_payload(kind, Payload::Index(index)))
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].push_child(child);
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind_of(&self, id: NodeId) -> NodeKind {
        self.get(id).kind()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Lowers an arena-handle tree rooted at `root` into a fully owned,
    /// move-only tree for the caller.
    ///
    /// Any node reached from more than one position — which only happens
    /// through a substitution resolving to a previously
    /// recorded declaration — is duplicated here rather than shared, since
    /// `OwnedNode` has no notion of reference identity.
    pub fn to_owned_tree(&self, root: NodeId) -> OwnedNode {
        let node = self.get(root);
        OwnedNode {
            kind: node.kind(),
            payload: node.payload().clone(),
            children: node
                .children()
                .iter()
                .map(|&child| self.to_owned_tree(child))
                .collect(),
        }
    }
}
