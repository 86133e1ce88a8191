//! `impl-function-type` (`XF`).
//!
//! `<callee-convention> <impl-attr>* <generics>? _ <impl-parameter>* _ <impl-result>* _`

use unmangle_core::{NodeId, NodeKind};

use super::scalars::ConventionContext;
use super::Parser;
use crate::error::{ParseError, ParseResult};

impl Parser<'_> {
    /// Called right after `XF` has been consumed.
    pub(super) fn parse_impl_function_type(&mut self) -> ParseResult<NodeId> {
        self.recurse(|p| {
            let node = p.create(NodeKind::ImplFunctionType);
            let mut pushed_generic_frame = false;
            let result = p.parse_impl_function_body(node, &mut pushed_generic_frame);
            if pushed_generic_frame {
                p.archetype_counts.pop();
            }
            result
        })
    }

    fn parse_impl_function_body(
        &mut self,
        node: NodeId,
        pushed_generic_frame: &mut bool,
    ) -> ParseResult<NodeId> {
        let callee = self.parse_callee_convention()?;
        self.add_child(node, callee);

        loop {
            match self.cursor.peek_at(0) {
                Some(b'C') => {
                    let attr = self.parse_impl_attribute()?;
                    self.add_child(node, attr);
                }
                Some(b'N') => {
                    self.cursor.next();
                    let attr = self.create_with_text(NodeKind::ImplFunctionAttribute, "@noreturn");
                    self.add_child(node, attr);
                }
                _ => break,
            }
        }

        if self.cursor.next_if(b'G') {
            let generics = self.parse_legacy_generics_clause()?;
            self.add_child(node, generics);
            *pushed_generic_frame = true;
        }

        if !self.cursor.next_if(b'_') {
            return Err(ParseError::Truncated);
        }

        let params = self.parse_impl_operand_list(NodeKind::ImplParameter, ConventionContext::Parameter)?;
        for param in params {
            self.add_child(node, param);
        }

        let results = self.parse_impl_operand_list(NodeKind::ImplResult, ConventionContext::Result)?;
        for result in results {
            self.add_child(node, result);
        }

        Ok(node)
    }

    fn parse_callee_convention(&mut self) -> ParseResult<NodeId> {
        let text = self.parse_impl_convention(ConventionContext::Callee)?;
        Ok(self.create_with_text(NodeKind::ImplConvention, text))
    }

    fn parse_impl_attribute(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'C'
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        let text = match byte {
            b'b' => "@objc_block",
            b'c' => "@cc(cdecl)",
            b'm' => "@cc(method)",
            b'O' => "@cc(objc_method)",
            b'w' => "@cc(witness_method)",
            _ => return Err(ParseError::UnknownTag),
        };
        Ok(self.create_with_text(NodeKind::ImplFunctionAttribute, text))
    }

    fn parse_impl_operand_list(
        &mut self,
        kind: NodeKind,
        context: ConventionContext,
    ) -> ParseResult<Vec<NodeId>> {
        let mut operands = Vec::new();
        while !self.cursor.next_if(b'_') {
            let convention_text = self.parse_impl_convention(context)?;
            let convention = self.create_with_text(NodeKind::ImplConvention, convention_text);
            let ty = self.recurse(Self::parse_type)?;
            let ty = self.wrap_type(ty);
            let operand = self.create(kind);
            self.add_child(operand, convention);
            self.add_child(operand, ty);
            operands.push(operand);
        }
        Ok(operands)
    }
}
