//! Recursive-descent parser over the mangled grammar.
//!
//! Grammar productions are grouped by concern into sibling files, each
//! contributing `impl Parser<'_>` blocks: [`entity`] (entity/nominal-type),
//! [`context`] (context/decl-name/identifier), [`scalars`] (natural/index/
//! directness/value-witness-kind/impl-convention), [`types`] (the `type`
//! production, builtins, bound generics), [`archetypes`], [`generics`]
//! (specialization-attribute, legacy and dependent generic signatures),
//! [`substitutions`], and [`impl_function`] (the `XF` ABI signature).

mod archetypes;
mod context;
mod entity;
mod generics;
mod impl_function;
mod scalars;
mod substitutions;
mod types;

#[cfg(test)]
mod archetypes_tests;
#[cfg(test)]
mod impl_function_tests;
#[cfg(test)]
mod scalars_tests;
#[cfg(test)]
mod substitutions_tests;
#[cfg(test)]
mod types_tests;

use unmangle_core::{Arena, NodeId, NodeKind, OwnedNode};

use crate::cursor::ByteCursor;
use crate::error::{ParseError, ParseResult};

/// Parsing recurses once per nested production; an adversarial input could
/// otherwise nest deeply enough to overflow the call stack.
const MAX_RECURSION_DEPTH: u32 = 1024;

pub struct Parser<'a> {
    cursor: ByteCursor<'a>,
    arena: Arena,
    substitutions: Vec<NodeId>,
    archetype_counts: Vec<u32>,
    depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Parser {
            cursor: ByteCursor::new(input),
            arena: Arena::new(),
            substitutions: Vec::new(),
            archetype_counts: Vec::new(),
            depth: 0,
        }
    }

    /// Runs the full entry sequence and lowers the result to
    /// an owned tree. Never fails: on any internal error the root becomes a
    /// `Failure` node instead.
    pub fn demangle(mut self) -> OwnedNode {
        match self.parse_entry() {
            Ok(root) => self.arena.to_owned_tree(root),
            Err(_) => OwnedNode::failure(),
        }
    }

    /// Wraps a recursive production with the depth guard. Every grammar
    /// method that can itself call back into the grammar (`type`, `context`,
    /// `entity`, archetypes, generic signatures, impl-function) goes through
    /// this instead of incrementing `depth` by hand.
    fn recurse<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            self.depth -= 1;
            return Err(ParseError::RecursionLimitExceeded);
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn create(&mut self, kind: NodeKind) -> NodeId {
        self.arena.create(kind)
    }

    fn create_with_text(&mut self, kind: NodeKind, text: &str) -> NodeId {
        self.arena.create_with_text(kind, text)
    }

    fn create_with_bytes(&mut self, kind: NodeKind, bytes: &[u8]) -> NodeId {
        self.arena.create_with_bytes(kind, bytes)
    }

    fn create_with_index(&mut self, kind: NodeKind, index: u64) -> NodeId {
        self.arena.create_with_index(kind, index)
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.arena.add_child(parent, child);
    }

    fn kind_of(&self, id: NodeId) -> NodeKind {
        self.arena.kind_of(id)
    }

    fn wrap_type(&mut self, inner: NodeId) -> NodeId {
        let ty = self.create(NodeKind::Type);
        self.add_child(ty, inner);
        ty
    }

    fn push_substitution(&mut self, id: NodeId) {
        self.substitutions.push(id);
    }

    /// Entry sequence: attribute prefixes, the body `global`,
    /// and any leftover bytes as a `Suffix`.
    fn parse_entry(&mut self) -> ParseResult<NodeId> {
        let root = self.create(NodeKind::Global);

        if self.cursor.next_if_prefix(b"_TTS") {
            let attr = self.recurse(Self::parse_specialization_attribute)?;
            if !self.cursor.next_if_prefix(b"_T") {
                return Err(ParseError::UnrecognizedMagic);
            }
            self.substitutions.clear();
            self.archetype_counts.clear();
            self.add_child(root, attr);
        } else if self.cursor.next_if_prefix(b"_TTo") {
            let attr = self.create(NodeKind::ObjCAttribute);
            self.add_child(root, attr);
        } else if self.cursor.next_if_prefix(b"_TTO") {
            let attr = self.create(NodeKind::NonObjCAttribute);
            self.add_child(root, attr);
        } else if self.cursor.next_if_prefix(b"_T") {
            // plain mangling, nothing to attach yet
        } else {
            return Err(ParseError::UnrecognizedMagic);
        }

        let body = self.recurse(Self::parse_global)?;
        self.add_child(root, body);

        if !self.cursor.is_empty() {
            let rest = self.cursor.take_rest();
            let suffix = self.create_with_bytes(NodeKind::Suffix, rest);
            self.add_child(root, suffix);
        }

        Ok(root)
    }

    /// `global`: dispatch on the first byte.
    fn parse_global(&mut self) -> ParseResult<NodeId> {
        if self.cursor.is_empty() {
            return Err(ParseError::Truncated);
        }
        match self.cursor.peek() {
            b'M' => self.parse_type_metadata_family(),
            b'P' => self.parse_partial_apply(),
            b't' => {
                self.cursor.next();
                let inner = self.recurse(Self::parse_type)?;
                Ok(self.wrap_type(inner))
            }
            b'w' => {
                self.cursor.next();
                self.parse_value_witness()
            }
            b'W' => self.parse_witness_table_family(),
            b'T' => self.parse_thunk_family(),
            _ => self.recurse(Self::parse_entity_or_nominal_type),
        }
    }

    fn parse_type_metadata_family(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'M'
        match self.cursor.peek_at(0) {
            Some(b'P') => {
                self.cursor.next();
                let directness = self.parse_directness()?;
                let pattern = self.create(NodeKind::GenericTypeMetadataPattern);
                self.add_child(pattern, directness);
                let inner = self.recurse(Self::parse_type)?;
                let ty = self.wrap_type(inner);
                self.add_child(pattern, ty);
                Ok(pattern)
            }
            Some(b'm') => {
                self.cursor.next();
                let metaclass = self.create(NodeKind::Metaclass);
                let inner = self.recurse(Self::parse_type)?;
                let ty = self.wrap_type(inner);
                self.add_child(metaclass, ty);
                Ok(metaclass)
            }
            Some(b'n') => {
                self.cursor.next();
                let descriptor = self.create(NodeKind::NominalTypeDescriptor);
                let inner = self.recurse(Self::parse_type)?;
                let ty = self.wrap_type(inner);
                self.add_child(descriptor, ty);
                Ok(descriptor)
            }
            _ => {
                let directness = self.parse_directness()?;
                let metadata = self.create(NodeKind::TypeMetadata);
                self.add_child(metadata, directness);
                let inner = self.recurse(Self::parse_type)?;
                let ty = self.wrap_type(inner);
                self.add_child(metadata, ty);
                Ok(metadata)
            }
        }
    }

    fn parse_partial_apply(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'P'
        if !self.cursor.next_if(b'A') {
            return Err(ParseError::UnknownTag);
        }
        let objc = self.cursor.next_if(b'o');
        let kind = if objc {
            NodeKind::PartialApplyObjCForwarder
        } else {
            NodeKind::PartialApplyForwarder
        };
        let node = self.create(kind);
        if self.cursor.next_if_prefix(b"__T") {
            let entity = self.recurse(Self::parse_entity_or_nominal_type)?;
            self.add_child(node, entity);
        }
        Ok(node)
    }

    fn parse_value_witness(&mut self) -> ParseResult<NodeId> {
        let name = self.parse_value_witness_kind()?;
        let witness = self.create_with_text(NodeKind::ValueWitness, name);
        let entity = self.recurse(Self::parse_entity_or_nominal_type)?;
        self.add_child(witness, entity);
        Ok(witness)
    }

    fn parse_witness_table_family(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'W'
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        match byte {
            b'V' => {
                let table = self.create(NodeKind::ValueWitnessTable);
                let inner = self.recurse(Self::parse_type)?;
                let ty = self.wrap_type(inner);
                self.add_child(table, ty);
                Ok(table)
            }
            b'o' => {
                let offset = self.create(NodeKind::WitnessTableOffset);
                let entity = self.recurse(Self::parse_entity_or_nominal_type)?;
                self.add_child(offset, entity);
                Ok(offset)
            }
            b'v' => {
                let directness = self.parse_directness()?;
                let offset = self.create(NodeKind::FieldOffset);
                self.add_child(offset, directness);
                let entity = self.recurse(Self::parse_entity_or_nominal_type)?;
                self.add_child(offset, entity);
                Ok(offset)
            }
            b'P' => {
                let table = self.create(NodeKind::ProtocolWitnessTable);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                self.add_child(table, conformance);
                Ok(table)
            }
            b'Z' => {
                let accessor = self.create(NodeKind::LazyProtocolWitnessTableAccessor);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                self.add_child(accessor, conformance);
                Ok(accessor)
            }
            b'z' => {
                let template = self.create(NodeKind::LazyProtocolWitnessTableTemplate);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                self.add_child(template, conformance);
                Ok(template)
            }
            b'D' => {
                let generator = self.create(NodeKind::DependentProtocolWitnessTableGenerator);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                self.add_child(generator, conformance);
                Ok(generator)
            }
            b'd' => {
                let template = self.create(NodeKind::DependentProtocolWitnessTableTemplate);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                self.add_child(template, conformance);
                Ok(template)
            }
            _ => Err(ParseError::UnknownTag),
        }
    }

    fn parse_thunk_family(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'T'
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        match byte {
            b'R' => {
                let thunk = self.create(NodeKind::ReabstractionThunkHelper);
                self.parse_reabstract_signature(thunk)?;
                Ok(thunk)
            }
            b'r' => {
                let thunk = self.create(NodeKind::ReabstractionThunk);
                self.parse_reabstract_signature(thunk)?;
                Ok(thunk)
            }
            b'W' => {
                let witness = self.create(NodeKind::ProtocolWitness);
                let conformance = self.recurse(Self::parse_protocol_conformance)?;
                let entity = self.recurse(Self::parse_entity_or_nominal_type)?;
                self.add_child(witness, conformance);
                self.add_child(witness, entity);
                Ok(witness)
            }
            _ => Err(ParseError::UnknownTag),
        }
    }

    /// Optional `G`-prefixed dependent generic signature, then a `from`
    /// type and a `to` type, attached to `thunk` in that order.
    fn parse_reabstract_signature(&mut self, thunk: NodeId) -> ParseResult<()> {
        if self.cursor.next_if(b'G') {
            let signature = self.recurse(Self::parse_dependent_generic_signature)?;
            self.add_child(thunk, signature);
        }
        let src = self.recurse(Self::parse_type)?;
        let src = self.wrap_type(src);
        self.add_child(thunk, src);
        let dest = self.recurse(Self::parse_type)?;
        let dest = self.wrap_type(dest);
        self.add_child(thunk, dest);
        Ok(())
    }
}
