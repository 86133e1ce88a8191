//! Substitution indices.

use unmangle_core::{NodeId, NodeKind};

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::tables::builtin_substitution;

impl Parser<'_> {
    /// Called right after the `S` tag byte has been consumed.
    pub(super) fn parse_substitution_index(&mut self) -> ParseResult<NodeId> {
        if let Some(letter) = self.cursor.peek_at(0) {
            if let Some(builtin) = builtin_substitution(letter) {
                self.cursor.next();
                return Ok(self.builtin_node(builtin));
            }
        }
        let index = self.parse_base26_substitution_index()?;
        let resolved = *self
            .substitutions
            .get(index as usize)
            .ok_or(ParseError::SubstitutionOutOfRange(index))?;
        Ok(resolved)
    }

    /// Substitution indices are `natural`-free: `_` selects entry 0, and
    /// `A`, `B`, …, `Z`, `Aa`, … select 1, 2, …, following the same
    /// base-26 counting the archetype stack uses, but over the
    /// substitution table rather than the archetype numbering space.
    fn parse_base26_substitution_index(&mut self) -> ParseResult<u32> {
        if self.cursor.next_if(b'_') {
            return Ok(0);
        }
        let mut value: u32 = 0;
        loop {
            let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
            match byte {
                b'A'..=b'Z' => {
                    value = value
                        .checked_mul(26)
                        .and_then(|v| v.checked_add((byte - b'A') as u32))
                        .ok_or(ParseError::SubstitutionOutOfRange(value))?;
                    return Ok(value + 1);
                }
                b'a'..=b'z' => {
                    value = value
                        .checked_mul(26)
                        .and_then(|v| v.checked_add((byte - b'a') as u32))
                        .ok_or(ParseError::SubstitutionOutOfRange(value))?;
                }
                _ => return Err(ParseError::MalformedScalar),
            }
        }
    }

    fn builtin_node(&mut self, builtin: &crate::tables::BuiltinSubstitution) -> NodeId {
        let module = self.create_with_text(NodeKind::Module, builtin.module);
        match builtin.name {
            None => module,
            Some(name) => {
                let decl = self.create_with_text(builtin.kind, name);
                self.add_child(decl, module);
                let decl_name = self.create_with_text(NodeKind::Identifier, name);
                self.add_child(decl, decl_name);
                decl
            }
        }
    }
}
