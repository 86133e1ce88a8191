//! Specialization attributes and generic signatures.

use unmangle_core::{NodeId, NodeKind};

use super::Parser;
use crate::error::{ParseError, ParseResult};

impl Parser<'_> {
    /// `specialization-attribute`: repeats `(type,
    /// conformance*)` until `_`.
    pub(super) fn parse_specialization_attribute(&mut self) -> ParseResult<NodeId> {
        let attribute = self.create(NodeKind::SpecializedAttribute);
        while !self.cursor.next_if(b'_') {
            let ty = self.parse_type()?;
            let wrapped = self.wrap_type(ty);
            let param = self.create(NodeKind::SpecializationParam);
            self.add_child(param, wrapped);
            while !self.cursor.next_if(b'_') {
                let conformance = self.parse_protocol_conformance()?;
                self.add_child(param, conformance);
            }
            self.add_child(attribute, param);
        }
        Ok(attribute)
    }

    /// Legacy `generics` clause, used by `U`-typed types and
    /// by impl-function-type's optional `G` clause. Pushes a fresh
    /// archetype-depth frame for the duration of the clause; the type or
    /// impl-function-type body that follows is parsed under this frame, and
    /// it is the caller's job to pop `archetype_counts` once that body has
    /// been fully parsed.
    ///
    /// `U` toggles "associated type" mode, in which protocol-list
    /// constraints are parsed but silently dropped rather than attached,
    /// and do not advance the archetype count. The clause ends at a `_`
    /// whose following byte is not `_`, `S`, a digit/`o` (an identifier
    /// start), or (outside associated-type mode) `U`.
    pub(super) fn parse_legacy_generics_clause(&mut self) -> ParseResult<NodeId> {
        let generics = self.create(NodeKind::Generics);
        let base = self.archetype_counts.last().copied().unwrap_or(0);
        self.archetype_counts.push(base);
        let mut assoc_mode = false;
        let mut count = base;

        loop {
            if !assoc_mode && self.cursor.next_if(b'U') {
                assoc_mode = true;
                continue;
            }

            if self.cursor.next_if(b'_') {
                let next = self.cursor.peek_at(0).ok_or(ParseError::Truncated)?;
                let continues = next == b'_'
                    || next == b'S'
                    || (!assoc_mode && next == b'U')
                    || is_start_of_identifier(next);
                if !continues {
                    break;
                }
                if !assoc_mode {
                    let name = super::archetypes::encode_base26(count);
                    let archetype = self.create_with_text(NodeKind::ArchetypeRef, &name);
                    self.add_child(generics, archetype);
                }
            } else {
                let protocols = self.finish_protocol_list()?;
                if assoc_mode {
                    continue;
                }
                let name = super::archetypes::encode_base26(count);
                let archetype = self.create_with_text(NodeKind::ArchetypeRef, &name);
                let entry = self.create(NodeKind::ArchetypeAndProtocol);
                self.add_child(entry, archetype);
                self.add_child(entry, protocols);
                self.add_child(generics, entry);
            }

            count += 1;
            if let Some(frame) = self.archetype_counts.last_mut() {
                *frame = count;
            }
        }

        Ok(generics)
    }

    /// Modern `dependent-generic-signature`, used after `u`.
    pub(super) fn parse_dependent_generic_signature(&mut self) -> ParseResult<NodeId> {
        let signature = self.create(NodeKind::DependentGenericSignature);

        loop {
            if self.cursor.next_if(b'R') {
                break;
            }
            let count = self.parse_index()?;
            let node = self.create_with_index(NodeKind::DependentGenericParamCount, count);
            self.add_child(signature, node);
        }

        while !self.cursor.next_if(b'_') {
            let requirement = if self.cursor.next_if(b'P') {
                let subject = self.parse_type()?;
                let subject = self.wrap_type(subject);
                let constraint = self.parse_type()?;
                let constraint = self.wrap_type(constraint);
                let req = self.create(NodeKind::DependentGenericConformanceRequirement);
                self.add_child(req, subject);
                self.add_child(req, constraint);
                req
            } else if self.cursor.next_if(b'E') {
                let lhs = self.parse_type()?;
                let lhs = self.wrap_type(lhs);
                let rhs = self.parse_type()?;
                let rhs = self.wrap_type(rhs);
                let req = self.create(NodeKind::DependentGenericSameTypeRequirement);
                self.add_child(req, lhs);
                self.add_child(req, rhs);
                req
            } else {
                return Err(ParseError::UnknownTag);
            };
            self.add_child(signature, requirement);
        }

        Ok(signature)
    }
}

/// Recognizes the bytes a `context`/`decl-name` production can legitimately
/// start with: a length digit, or the one-letter `o` module shorthand.
fn is_start_of_identifier(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'o'
}
