//! `entity` and `nominal-type`.

use unmangle_core::{NodeId, NodeKind};

use super::Parser;
use crate::error::{ParseError, ParseResult};

impl Parser<'_> {
    /// Entry point used by `global` and every meta-node that "carries an
    /// entity" (witnesses, thunks, partial-apply forwarders, …).
    pub(super) fn parse_entity_or_nominal_type(&mut self) -> ParseResult<NodeId> {
        let byte = self.cursor.peek_at(0).ok_or(ParseError::Truncated)?;
        let base_kind = match byte {
            b'F' => Some(NodeKind::Function),
            b'v' => Some(NodeKind::Variable),
            b'I' => Some(NodeKind::Initializer),
            b's' => Some(NodeKind::Subscript),
            _ => None,
        };

        if let Some(base_kind) = base_kind {
            self.cursor.next();
            return self.parse_entity_name(base_kind);
        }

        if matches!(byte, b'C' | b'V' | b'O') {
            return self.parse_nominal_type();
        }

        Err(ParseError::UnknownTag)
    }

    fn parse_nominal_type(&mut self) -> ParseResult<NodeId> {
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        let kind = match byte {
            b'C' => NodeKind::Class,
            b'V' => NodeKind::Structure,
            b'O' => NodeKind::Enum,
            _ => unreachable!("caller checked the tag byte"),
        };
        let context = self.parse_context()?;
        let name = self.parse_decl_name()?;
        let node = self.create(kind);
        self.add_child(node, context);
        self.add_child(node, name);
        self.push_substitution(node);
        Ok(node)
    }

    /// Entity-name variant dispatch, after the kind byte and
    /// the `context` have been consumed.
    fn parse_entity_name(&mut self, base_kind: NodeKind) -> ParseResult<NodeId> {
        let context = self.parse_context()?;
        let byte = self.cursor.peek_at(0).ok_or(ParseError::Truncated)?;

        // Only the markers below consume their own byte; the fallback
        // leaves it in place so `parse_decl_name` can read it as the start
        // of an ordinary identifier (which may itself be `L`-prefixed).
        match byte {
            b'D' => {
                self.cursor.next();
                let kind = if self.kind_of(context) == NodeKind::Class {
                    NodeKind::Deallocator
                } else {
                    NodeKind::Destructor
                };
                self.entity_node(kind, context, None, false)
            }
            b'd' => {
                self.cursor.next();
                self.entity_node(NodeKind::Destructor, context, None, false)
            }
            b'e' => {
                self.cursor.next();
                self.entity_node(NodeKind::IVarInitializer, context, None, false)
            }
            b'E' => {
                self.cursor.next();
                self.entity_node(NodeKind::IVarDestroyer, context, None, false)
            }
            b'C' => {
                self.cursor.next();
                let kind = if self.kind_of(context) == NodeKind::Class {
                    NodeKind::Allocator
                } else {
                    NodeKind::Constructor
                };
                self.entity_node(kind, context, None, true)
            }
            b'c' => {
                self.cursor.next();
                self.entity_node(NodeKind::Constructor, context, None, true)
            }
            b'a' => {
                self.cursor.next();
                let name = self.parse_decl_name()?;
                self.entity_node(NodeKind::Addressor, context, Some(name), true)
            }
            b'g' => {
                self.cursor.next();
                let name = self.parse_decl_name()?;
                self.entity_node(NodeKind::Getter, context, Some(name), true)
            }
            b's' => {
                self.cursor.next();
                let name = self.parse_decl_name()?;
                self.entity_node(NodeKind::Setter, context, Some(name), true)
            }
            b'w' => {
                self.cursor.next();
                let name = self.parse_decl_name()?;
                self.entity_node(NodeKind::WillSet, context, Some(name), true)
            }
            b'W' => {
                self.cursor.next();
                let name = self.parse_decl_name()?;
                self.entity_node(NodeKind::DidSet, context, Some(name), true)
            }
            b'U' => {
                self.cursor.next();
                let index = self.parse_index()?;
                let closure = self.create_with_index(NodeKind::ExplicitClosure, index);
                self.add_child(closure, context);
                let ty = self.recurse(Self::parse_type)?;
                let wrapped = self.wrap_type(ty);
                self.add_child(closure, wrapped);
                Ok(closure)
            }
            b'u' => {
                self.cursor.next();
                let index = self.parse_index()?;
                let closure = self.create_with_index(NodeKind::ImplicitClosure, index);
                self.add_child(closure, context);
                let ty = self.recurse(Self::parse_type)?;
                let wrapped = self.wrap_type(ty);
                self.add_child(closure, wrapped);
                Ok(closure)
            }
            b'A' if base_kind == NodeKind::Initializer => {
                self.cursor.next();
                let index = self.parse_index()?;
                let node = self.create_with_index(NodeKind::DefaultArgumentInitializer, index);
                self.add_child(node, context);
                Ok(node)
            }
            b'i' if base_kind == NodeKind::Initializer => {
                self.cursor.next();
                self.entity_node(NodeKind::Initializer, context, None, false)
            }
            _ => {
                let name = self.parse_decl_name()?;
                self.entity_node(base_kind, context, Some(name), true)
            }
        }
    }

    fn entity_node(
        &mut self,
        kind: NodeKind,
        context: NodeId,
        extra: Option<NodeId>,
        has_type: bool,
    ) -> ParseResult<NodeId> {
        let node = self.create(kind);
        self.add_child(node, context);
        if let Some(extra) = extra {
            self.add_child(node, extra);
        }
        if has_type {
            let ty = self.recurse(Self::parse_type)?;
            let wrapped = self.wrap_type(ty);
            self.add_child(node, wrapped);
        }
        Ok(node)
    }
}
