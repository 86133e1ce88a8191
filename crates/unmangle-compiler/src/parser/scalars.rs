//! Scalars and tags: natural numbers, indices, directness,
//! value-witness codes, and impl-convention letters.

use unmangle_core::NodeKind;

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::tables::value_witness_name;

/// Which position an `impl-convention` letter is read in; the same letter
/// means different things in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionContext {
    Callee,
    Parameter,
    Result,
}

impl Parser<'_> {
    /// `natural`: one or more decimal digits, no sign.
    fn parse_natural(&mut self) -> ParseResult<u64> {
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

    /// `index`: `_` (zero) or `natural` `_` (natural + 1).
    pub(super) fn parse_index(&mut self) -> ParseResult<u64> {
        if self.cursor.next_if(b'_') {
            return Ok(0);
        }
        let n = self.parse_natural()?;
        if !self.cursor.next_if(b'_') {
            return Err(ParseError::MalformedScalar);
        }
        n.checked_add(1).ok_or(ParseError::MalformedScalar)
    }

    /// `builtin-size`: a natural followed by `_`.
    pub(super) fn parse_builtin_size(&mut self) -> ParseResult<u64> {
        let n = self.parse_natural()?;
        if !self.cursor.next_if(b'_') {
            return Err(ParseError::MalformedScalar);
        }
        Ok(n)
    }

    pub(super) fn parse_directness(&mut self) -> ParseResult<unmangle_core::NodeId> {
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        let text = match byte {
            b'd' => "direct",
            b'i' => "indirect",
            _ => return Err(ParseError::UnknownTag),
        };
        Ok(self.create_with_text(NodeKind::Directness, text))
    }

    pub(super) fn parse_value_witness_kind(&mut self) -> ParseResult<&'static str> {
        if !self.cursor.has_at_least(2) {
            return Err(ParseError::Truncated);
        }
        let bytes = self.cursor.slice(2);
        let code = [bytes[0], bytes[1]];
        let name = value_witness_name(code).ok_or(ParseError::BadOperatorAlphabet)?;
        self.cursor.advance(2);
        Ok(name)
    }

    /// `impl-convention`: a single letter, interpreted
    /// according to `context`.
    pub(super) fn parse_impl_convention(
        &mut self,
        context: ConventionContext,
    ) -> ParseResult<&'static str> {
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        use ConventionContext::*;
        let text = match (byte, context) {
            (b't', Callee) => "@thin",
            (b'a', Result) => "@autoreleased",
            (b'd', Callee) => "@callee_unowned",
            (b'd', Parameter) => "@unowned",
            (b'd', Result) => "@unowned",
            (b'g', Callee) => "@callee_guaranteed",
            (b'g', Parameter) => "@guaranteed",
            (b'g', Result) => "@guaranteed",
            (b'i', Parameter) => "@in",
            (b'i', Result) => "@out",
            (b'l', Parameter) => "@inout",
            (b'o', Callee) => "@callee_owned",
            (b'o', Parameter) => "@owned",
            (b'o', Result) => "@owned",
            _ => return Err(ParseError::UnknownTag),
        };
        Ok(text)
    }
}
