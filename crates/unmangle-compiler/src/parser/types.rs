//! `type`: the dispatch table for every type production.

use unmangle_core::{NodeId, NodeKind};

use super::Parser;
use crate::error::{ParseError, ParseResult};

impl Parser<'_> {
    /// `type`: dispatch on the first byte. Callers wrap the result in a
    /// `Type` node themselves via [`Parser::wrap_type`] where the grammar
    /// calls for it (most productions do; a few, like bound-generic type
    /// arguments, nest `type` productions that are already pre-wrapped by
    /// their own caller).
    pub(super) fn parse_type(&mut self) -> ParseResult<NodeId> {
        self.recurse(|p| {
            let byte = p.cursor.peek_at(0).ok_or(ParseError::Truncated)?;
            match byte {
                b'B' => p.parse_builtin_type(),
                b'a' => {
                    p.cursor.next();
                    let context = p.parse_context()?;
                    let name = p.parse_decl_name()?;
                    let alias = p.create(NodeKind::TypeAlias);
                    p.add_child(alias, context);
                    p.add_child(alias, name);
                    Ok(alias)
                }
                b'b' => {
                    p.cursor.next();
                    p.parse_function_shape(NodeKind::ObjCBlock)
                }
                b'D' => {
                    p.cursor.next();
                    let inner = p.parse_type()?;
                    let wrapped = p.wrap_type(inner);
                    let node = p.create(NodeKind::DynamicSelf);
                    p.add_child(node, wrapped);
                    Ok(node)
                }
                b'E' => {
                    p.cursor.next();
                    if !p.cursor.next_if_prefix(b"RR") {
                        return Err(ParseError::UnknownTag);
                    }
                    Ok(p.create(NodeKind::ErrorType))
                }
                b'F' => {
                    p.cursor.next();
                    p.parse_function_shape(NodeKind::FunctionType)
                }
                b'f' => {
                    p.cursor.next();
                    p.parse_uncurried_function_type()
                }
                b'G' => {
                    p.cursor.next();
                    p.parse_bound_generic_type()
                }
                b'K' => {
                    p.cursor.next();
                    p.parse_function_shape(NodeKind::AutoClosureType)
                }
                b'M' => {
                    p.cursor.next();
                    let inner = p.parse_type()?;
                    let wrapped = p.wrap_type(inner);
                    let node = p.create(NodeKind::Metatype);
                    p.add_child(node, wrapped);
                    Ok(node)
                }
                b'P' => p.parse_protocol_list_or_existential_metatype(),
                b'Q' => p.parse_archetype(),
                b'q' => p.parse_dependent_generic_param_type(),
                b'R' => {
                    p.cursor.next();
                    let inner = p.parse_type()?;
                    let wrapped = p.wrap_type(inner);
                    let node = p.create(NodeKind::InOut);
                    p.add_child(node, wrapped);
                    Ok(node)
                }
                b'S' => {
                    p.cursor.next();
                    p.parse_substitution_index()
                }
                b'T' => {
                    p.cursor.next();
                    p.parse_tuple(NodeKind::NonVariadicTuple)
                }
                b't' => {
                    p.cursor.next();
                    p.parse_tuple(NodeKind::VariadicTuple)
                }
                b'u' => {
                    p.cursor.next();
                    let signature = p.parse_dependent_generic_signature()?;
                    let inner = p.parse_type()?;
                    let wrapped = p.wrap_type(inner);
                    let node = p.create(NodeKind::DependentGenericType);
                    p.add_child(node, signature);
                    p.add_child(node, wrapped);
                    Ok(node)
                }
                b'U' => {
                    p.cursor.next();
                    let generics = p.parse_legacy_generics_clause()?;
                    let base = p.parse_type()?;
                    let wrapped = p.wrap_type(base);
                    let node = p.create(NodeKind::GenericType);
                    p.add_child(node, generics);
                    p.add_child(node, wrapped);
                    Ok(node)
                }
                b'X' => p.parse_reference_storage_or_impl_function(),
                b'C' | b'V' | b'O' => p.parse_entity_or_nominal_type(),
                _ => Err(ParseError::UnknownTag),
            }
        })
    }

    fn parse_builtin_type(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'B'
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        match byte {
            b'f' => {
                let size = self.parse_builtin_size()?;
                Ok(self.create_with_text(NodeKind::BuiltinTypeName, &format!("Builtin.Float{size}")))
            }
            b'i' => {
                let size = self.parse_builtin_size()?;
                Ok(self.create_with_text(NodeKind::BuiltinTypeName, &format!("Builtin.Int{size}")))
            }
            b'v' => {
                let lanes = self.parse_builtin_size()?;
                let elem_byte = self.cursor.next().ok_or(ParseError::Truncated)?;
                let elem = match elem_byte {
                    b'i' => {
                        let size = self.parse_builtin_size()?;
                        format!("IntN{size}")
                    }
                    b'f' => {
                        let size = self.parse_builtin_size()?;
                        format!("FloatN{size}")
                    }
                    b'p' => "RawPointer".to_string(),
                    _ => return Err(ParseError::UnknownTag),
                };
                Ok(self.create_with_text(
                    NodeKind::BuiltinTypeName,
                    &format!("Builtin.Vec{lanes}x{elem}"),
                ))
            }
            b'O' => Ok(self.create_with_text(NodeKind::BuiltinTypeName, "Builtin.UnknownObject")),
            b'o' => Ok(self.create_with_text(NodeKind::BuiltinTypeName, "Builtin.NativeObject")),
            b'p' => Ok(self.create_with_text(NodeKind::BuiltinTypeName, "Builtin.RawPointer")),
            b'w' => Ok(self.create_with_text(NodeKind::BuiltinTypeName, "Builtin.Word")),
            _ => Err(ParseError::UnknownTag),
        }
    }

    /// Shared shape for `F`/`K`/`b`-introduced function types: an argument
    /// tuple followed by a result type.
    fn parse_function_shape(&mut self, kind: NodeKind) -> ParseResult<NodeId> {
        let args = self.parse_type()?;
        let args = self.wrap_type(args);
        let args_tuple = self.create(NodeKind::ArgumentTuple);
        self.add_child(args_tuple, args);

        let result = self.parse_type()?;
        let result = self.wrap_type(result);
        let return_type = self.create(NodeKind::ReturnType);
        self.add_child(return_type, result);

        let node = self.create(kind);
        self.add_child(node, args_tuple);
        self.add_child(node, return_type);
        Ok(node)
    }

    /// `f`: distinct from `F` in that the first operand is a raw,
    /// unwrapped type representing the self/context parameter.
    fn parse_uncurried_function_type(&mut self) -> ParseResult<NodeId> {
        let context_param = self.parse_type()?;
        let function = self.parse_function_shape(NodeKind::FunctionType)?;
        let node = self.create(NodeKind::UncurriedFunctionType);
        self.add_child(node, context_param);
        self.add_child(node, function);
        Ok(node)
    }

    /// The unbound type's own kind (Class/Structure/Enum) picks the bound
    /// variant; the unbound node itself — not a `Type`
    /// wrapper around it — becomes the first child.
    fn parse_bound_generic_type(&mut self) -> ParseResult<NodeId> {
        let unbound = self.parse_type()?;
        let bound_kind = self
            .kind_of(unbound)
            .bound_generic_counterpart()
            .ok_or(ParseError::UnknownTag)?;

        let mut args = Vec::new();
        while !self.cursor.next_if(b'_') {
            let arg = self.parse_type()?;
            args.push(self.wrap_type(arg));
        }

        let type_list = self.create(NodeKind::TypeList);
        for arg in args {
            self.add_child(type_list, arg);
        }

        let node = self.create(bound_kind);
        self.add_child(node, unbound);
        self.add_child(node, type_list);
        Ok(node)
    }

    fn parse_protocol_list_or_existential_metatype(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'P'
        if self.cursor.next_if(b'M') {
            let inner = self.parse_protocol_list()?;
            let node = self.create(NodeKind::ExistentialMetatype);
            self.add_child(node, inner);
            return Ok(node);
        }
        self.finish_protocol_list()
    }

    pub(super) fn parse_protocol_list(&mut self) -> ParseResult<NodeId> {
        if !self.cursor.next_if(b'P') {
            return Err(ParseError::UnknownTag);
        }
        self.finish_protocol_list()
    }

    pub(super) fn finish_protocol_list(&mut self) -> ParseResult<NodeId> {
        let list = self.create(NodeKind::ProtocolList);
        while !self.cursor.next_if(b'_') {
            let context = self.parse_context()?;
            let name = self.parse_decl_name()?;
            let protocol = self.create(NodeKind::Protocol);
            self.add_child(protocol, context);
            self.add_child(protocol, name);
            self.add_child(list, protocol);
        }
        Ok(list)
    }

    fn parse_tuple(&mut self, kind: NodeKind) -> ParseResult<NodeId> {
        let tuple = self.create(kind);
        while !self.cursor.next_if(b'_') {
            let element = self.parse_tuple_element()?;
            self.add_child(tuple, element);
        }
        Ok(tuple)
    }

    fn parse_tuple_element(&mut self) -> ParseResult<NodeId> {
        let element = self.create(NodeKind::TupleElement);
        if self.begins_identifier_label() {
            let label = self.parse_identifier()?;
            let label_node = self.create_with_text(NodeKind::TupleElementName, &label);
            self.add_child(element, label_node);
        }
        let ty = self.parse_type()?;
        let wrapped = self.wrap_type(ty);
        self.add_child(element, wrapped);
        Ok(element)
    }

    /// A tuple-element label is an ordinary length-prefixed identifier, but
    /// only when a digit (the length) actually follows — `_` terminates the
    /// tuple and a type-tag byte starts an unlabeled element.
    fn begins_identifier_label(&self) -> bool {
        matches!(self.cursor.peek_at(0), Some(b) if b.is_ascii_digit())
    }

    fn parse_reference_storage_or_impl_function(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'X'
        let byte = self.cursor.next().ok_or(ParseError::Truncated)?;
        match byte {
            b'o' => self.wrap_reference_storage(NodeKind::Unowned),
            b'u' => self.wrap_reference_storage(NodeKind::Unmanaged),
            b'w' => self.wrap_reference_storage(NodeKind::Weak),
            b'F' => self.parse_impl_function_type(),
            _ => Err(ParseError::UnknownTag),
        }
    }

    fn wrap_reference_storage(&mut self, kind: NodeKind) -> ParseResult<NodeId> {
        let inner = self.parse_type()?;
        let wrapped = self.wrap_type(inner);
        let node = self.create(kind);
        self.add_child(node, wrapped);
        Ok(node)
    }

    /// `q`: dependent generic parameter, `qd<depth><index>` or `q<index>`.
    fn parse_dependent_generic_param_type(&mut self) -> ParseResult<NodeId> {
        self.cursor.next(); // 'q'
        let (depth, index) = if self.cursor.next_if(b'd') {
            let depth_index = self.parse_index()?;
            let index = self.parse_index()?;
            (depth_index + 1, index)
        } else {
            let index = self.parse_index()?;
            (0, index)
        };
        let text = format!("T_{depth}_{index}");
        Ok(self.create_with_text(NodeKind::DependentGenericParamType, &text))
    }

    pub(super) fn parse_protocol_conformance(&mut self) -> ParseResult<NodeId> {
        let ty = self.parse_type()?;
        let wrapped = self.wrap_type(ty);
        let protocol_context = self.parse_context()?;
        let protocol_name = self.parse_decl_name()?;
        let protocol = self.create(NodeKind::Protocol);
        self.add_child(protocol, protocol_context);
        self.add_child(protocol, protocol_name);
        let conformance = self.create(NodeKind::ProtocolConformance);
        self.add_child(conformance, wrapped);
        self.add_child(conformance, protocol);
        Ok(conformance)
    }
}
