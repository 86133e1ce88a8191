//! Type printing: function shapes, tuples, existentials, metatypes, and
//! standard-library sugar for bound generics.

use unmangle_core::{NodeKind, OwnedNode};

use super::Printer;

impl Printer<'_> {
    pub(super) fn print_type_like(&self, node: &OwnedNode) -> String {
        use NodeKind::*;
        match node.kind {
            BuiltinTypeName => node.text().unwrap_or_default().to_string(),
            ErrorType => "<ERROR TYPE>".to_string(),
            DynamicSelf => "Self".to_string(),
            ArchetypeRef => node.text().unwrap_or_default().to_string(),
            SelfTypeRef => format!("{}.Self", self.print(&node.children[0])),
            AssociatedTypeRef => {
                format!("{}.{}", self.print(&node.children[0]), node.children[1].text().unwrap_or_default())
            }
            QualifiedArchetype => format!(
                "(archetype {} of {})",
                self.print(&node.children[0]),
                self.print(&node.children[1])
            ),
            InOut => self.print_prefixed_type(node, "inout "),
            Weak => self.print_prefixed_type(node, "weak "),
            Unowned => self.print_prefixed_type(node, "unowned "),
            Unmanaged => self.print_prefixed_type(node, "unowned(unsafe) "),
            Metatype => self.print_metatype(node),
            ExistentialMetatype => format!("{}.Type", self.print(&node.children[0])),
            ProtocolList => self.print_protocol_list(node),
            FunctionType => self.print_function_shape(node, ""),
            ObjCBlock => self.print_function_shape(node, "@objc_block "),
            AutoClosureType => self.print_function_shape(node, "@auto_closure "),
            UncurriedFunctionType => {
                format!("{}{}", self.print(&node.children[0]), self.print(&node.children[1]))
            }
            ArgumentTuple => self.print_argument_tuple(node),
            ReturnType => format!(" -> {}", self.print(&node.children[0])),
            NonVariadicTuple => self.print_tuple(node, false),
            VariadicTuple => self.print_tuple(node, true),
            TupleElement => self.print_tuple_element(node),
            TupleElementName => node.text().unwrap_or_default().to_string(),
            BoundGenericClass | BoundGenericStructure | BoundGenericEnum => {
                self.print_bound_generic(node)
            }
            DependentGenericParamType => node.text().unwrap_or_default().to_string(),
            DependentMemberType => format!("{}.{}", self.print(&node.children[0]), node.text().unwrap_or_default()),
            GenericType => self.print_generic_type(node),
            TypeList => node.children.iter().map(|c| self.print(c)).collect::<Vec<_>>().join(", "),
            _ => String::new(),
        }
    }

    fn print_prefixed_type(&self, node: &OwnedNode, prefix: &str) -> String {
        format!("{prefix}{}", self.print(&node.children[0]))
    }

    fn print_metatype(&self, node: &OwnedNode) -> String {
        let wrapped = &node.children[0];
        let is_existential = wrapped
            .children
            .first()
            .map(|inner| matches!(inner.kind, NodeKind::ExistentialMetatype | NodeKind::ProtocolList))
            .unwrap_or(false);
        let suffix = if is_existential { ".Protocol" } else { ".Type" };
        format!("{}{}", self.print(wrapped), suffix)
    }

    fn print_protocol_list(&self, node: &OwnedNode) -> String {
        if node.children.len() == 1 {
            return self.print(&node.children[0]);
        }
        let parts = node.children.iter().map(|p| self.print(p)).collect::<Vec<_>>().join(", ");
        format!("protocol<{parts}>")
    }

    fn print_function_shape(&self, node: &OwnedNode, prefix: &str) -> String {
        let args = self.print(&node.children[0]);
        let ret = self.print(&node.children[1]);
        format!("{prefix}{args}{ret}")
    }

    /// `(` unless the single operand is already a parenthesized tuple.
    fn print_argument_tuple(&self, node: &OwnedNode) -> String {
        let wrapped = &node.children[0];
        let text = self.print(wrapped);
        let already_parenthesized = wrapped
            .children
            .first()
            .map(|inner| matches!(inner.kind, NodeKind::VariadicTuple | NodeKind::NonVariadicTuple))
            .unwrap_or(false);
        if already_parenthesized {
            text
        } else {
            format!("({text})")
        }
    }

    fn print_tuple(&self, node: &OwnedNode, variadic: bool) -> String {
        let mut parts: Vec<String> = node.children.iter().map(|e| self.print(e)).collect();
        if variadic {
            if let Some(last) = parts.last_mut() {
                last.push_str("...");
            }
        }
        format!("({})", parts.join(", "))
    }

    fn print_tuple_element(&self, node: &OwnedNode) -> String {
        if node.children.len() == 2 {
            format!("{}: {}", self.print(&node.children[0]), self.print(&node.children[1]))
        } else {
            self.print(&node.children[0])
        }
    }

    fn print_generic_type(&self, node: &OwnedNode) -> String {
        let generics = self.print(&node.children[0]);
        let inner = node.children[1].children.first().map(|i| self.print(i)).unwrap_or_default();
        format!("{generics}{inner}")
    }

    fn print_bound_generic(&self, node: &OwnedNode) -> String {
        let unbound = &node.children[0];
        let args = &node.children[1].children;
        if self.options.synthesize_sugar_on_types {
            if let Some(sugar) = self.try_print_sugar(node.kind, unbound, args) {
                return sugar;
            }
        }
        let base = self.print(unbound);
        let args_str = args.iter().map(|a| self.print(a)).collect::<Vec<_>>().join(", ");
        format!("{base}<{args_str}>")
    }

    /// Sugar for the stdlib's `Optional`, `ImplicitlyUnwrappedOptional`,
    /// `Array`, and `Dictionary`. `BoundGenericClass` never
    /// gets sugar — only enum/struct bound generics from the `Swift`
    /// module with the expected arity qualify.
    fn try_print_sugar(&self, kind: NodeKind, unbound: &OwnedNode, args: &[OwnedNode]) -> Option<String> {
        if kind == NodeKind::BoundGenericClass {
            return None;
        }
        let context = unbound.children.first()?;
        if context.kind != NodeKind::Module || context.text() != Some("Swift") {
            return None;
        }
        let name = unbound.children.get(1)?.text()?;
        match (kind, name, args.len()) {
            (NodeKind::BoundGenericEnum, "Optional", 1) => Some(format!("{}?", self.print_sugar_arg(&args[0]))),
            (NodeKind::BoundGenericEnum, "ImplicitlyUnwrappedOptional", 1) => {
                Some(format!("{}!", self.print_sugar_arg(&args[0])))
            }
            (NodeKind::BoundGenericStructure, "Array", 1) => Some(format!("[{}]", self.print(&args[0]))),
            (NodeKind::BoundGenericStructure, "Dictionary", 2) => {
                Some(format!("[{} : {}]", self.print(&args[0]), self.print(&args[1])))
            }
            _ => None,
        }
    }

    fn print_sugar_arg(&self, wrapped: &OwnedNode) -> String {
        let text = self.print(wrapped);
        let simple = wrapped.children.first().map(|inner| self.is_simple_type(inner)).unwrap_or(true);
        if simple {
            text
        } else {
            format!("({text})")
        }
    }

    /// The fixed "simple" set: types that read unambiguously
    /// without surrounding parens when used as the operand of `?`/`!`.
    /// Everything else gets parenthesized in that position.
    fn is_simple_type(&self, node: &OwnedNode) -> bool {
        use NodeKind::*;
        matches!(
            node.kind,
            NonVariadicTuple
                | VariadicTuple
                | BoundGenericClass
                | BoundGenericStructure
                | BoundGenericEnum
                | Module
                | ArchetypeRef
                | QualifiedArchetype
                | DependentGenericParamType
                | DependentGenericType
                | DependentMemberType
                | ProtocolList
                | ExistentialMetatype
                | ErrorType
                | Metatype
                | ReturnType
                | SelfTypeRef
                | AssociatedTypeRef
                | TypeAlias
                | BuiltinTypeName
                | Class
                | Structure
                | Enum
                | Protocol
                | DynamicSelf
        )
    }
}
