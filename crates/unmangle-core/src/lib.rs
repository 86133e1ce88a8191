//! Core data structures shared by the unmangle parser and pretty-printer.
//!
//! This crate has no parsing logic of its own. It defines the closed set of
//! node kinds a demangling tree can contain ([`NodeKind`]), the payload a
//! node carries ([`Payload`]), the arena that owns nodes during a parse
//! ([`Arena`], [`NodeId`], [`Node`]), and the fully owned tree shape handed
//! back to callers once parsing finishes ([`OwnedNode`]).

mod arena;
mod kind;
mod node;
mod owned;
mod payload;

#[cfg(test)]
mod arena_tests;
#[cfg(test)]
mod owned_tests;

pub use arena::Arena;
pub use kind::NodeKind;
pub use node::{Node, NodeId};
pub use owned::OwnedNode;
pub use payload::Payload;
