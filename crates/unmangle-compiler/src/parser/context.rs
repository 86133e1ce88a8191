//! `context`, `decl-name`, and `identifier`.

use unmangle_core::{NodeId, NodeKind};

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::punycode;
use crate::tables::remap_operator_byte;

impl Parser<'_> {
    /// `context`: a substitution, a nested entity, or a module identifier.
    pub(super) fn parse_context(&mut self) -> ParseResult<NodeId> {
        self.recurse(|p| {
            if p.cursor.next_if(b'S') {
                return p.parse_substitution_index();
            }
            if p.begins_entity() {
                return p.parse_entity_or_nominal_type();
            }
            let module = p.parse_identifier()?;
            let module = p.create_with_text(NodeKind::Module, &module);
            p.push_substitution(module);
            Ok(module)
        })
    }

    pub(super) fn begins_entity(&self) -> bool {
        matches!(
            self.cursor.peek_at(0),
            Some(b'F') | Some(b'v') | Some(b'I') | Some(b's') | Some(b'C') | Some(b'V') | Some(b'O')
        )
    }

    /// `decl-name`: `L` + index + identifier, or a bare identifier.
    pub(super) fn parse_decl_name(&mut self) -> ParseResult<NodeId> {
        if self.cursor.next_if(b'L') {
            let discriminator = self.parse_index()?;
            let text = self.parse_identifier()?;
            let local = self.create_with_text(NodeKind::LocalDeclName, &text);
            let index = self.create_with_index(NodeKind::Number, discriminator);
            self.add_child(local, index);
            return Ok(local);
        }
        let text = self.parse_identifier()?;
        Ok(self.create_with_text(NodeKind::Identifier, &text))
    }

    /// `identifier`: optional Punycode, optional operator marker, then a
    /// length-prefixed byte run.
    pub(super) fn parse_identifier(&mut self) -> ParseResult<String> {
        let punycoded = self.cursor.next_if(b'X');

        let operator_mode = if self.cursor.next_if(b'o') {
            match self.cursor.next().ok_or(ParseError::Truncated)? {
                b'p' => Some(OperatorMode::Prefix),
                b'P' => Some(OperatorMode::Postfix),
                b'i' => Some(OperatorMode::Infix),
                _ => return Err(ParseError::UnknownTag),
            }
        } else {
            None
        };

        let len = self.parse_natural_inline()?;
        if !self.cursor.has_at_least(len as usize) {
            return Err(ParseError::Truncated);
        }
        let raw = self.cursor.slice(len as usize).to_vec();
        self.cursor.advance(len as usize);

        let text = if punycoded {
            punycode::decode(&raw)?
        } else {
            String::from_utf8_lossy(&raw).into_owned()
        };

        let text = if operator_mode.is_some() {
            remap_operator_text(&text)?
        } else {
            text
        };

        Ok(text)
    }

    /// A bare `natural` used as the identifier length (not an `index` — no
    /// trailing underscore here).
    fn parse_natural_inline(&mut self) -> ParseResult<u64> {
        let mut value: u64 = 0;
        let mut saw_digit = false;
        while let Some(b) = self.cursor.peek_at(0) {
            if !b.is_ascii_digit() {
                break;
            }
            self.cursor.next();
            saw_digit = true;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u64))
                .ok_or(ParseError::MalformedScalar)?;
        }
        if !saw_digit {
            return Err(ParseError::MalformedScalar);
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorMode {
    Prefix,
    Postfix,
    Infix,
}

/// Remaps every ASCII `a..z` byte of an operator identifier through the
/// 26-slot operator alphabet; non-ASCII bytes pass through verbatim.
fn remap_operator_text(text: &str) -> ParseResult<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_lowercase() {
            let mapped = remap_operator_byte(ch as u8).ok_or(ParseError::BadOperatorAlphabet)?;
            out.push(mapped as char);
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}
