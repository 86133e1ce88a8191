//! Pretty-printer: walks a demangling tree and re-synthesizes
//! source-like text, including sugar for the standard library's bound
//! generics and the impl-function-type attrs/inputs/results state machine.

mod entities;
mod generics;
mod impl_function;
mod meta;
mod types;

#[cfg(test)]
mod impl_function_tests;
#[cfg(test)]
mod meta_tests;
#[cfg(test)]
mod types_tests;


use unmangle_core::{NodeKind, OwnedNode};

/// Printer configuration. Both fields default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterOptions {
    pub synthesize_sugar_on_types: bool,
    pub display_type_of_ivar_field_offset: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            synthesize_sugar_on_types: true,
            display_type_of_ivar_field_offset: true,
        }
    }
}

pub(crate) struct Printer<'a> {
    pub(crate) options: &'a PrinterOptions,
}

/// `node_to_string`: prints a `Global` tree. Never fails (P8) —
/// an unrecognized or malformed shape simply contributes nothing rather
/// than panicking.
pub fn node_to_string(node: &OwnedNode, options: &PrinterOptions) -> String {
    Printer { options }.print_root(node)
}

impl Printer<'_> {
    fn print_root(&self, node: &OwnedNode) -> String {
        if node.kind != NodeKind::Global {
            return self.print(node);
        }
        let mut out = String::new();
        for child in &node.children {
            if child.kind == NodeKind::Suffix {
                continue;
            }
            out.push_str(&self.print(child));
        }
        out
    }

    /// The single recursive entry point every node kind funnels through.
    pub(crate) fn print(&self, node: &OwnedNode) -> String {
        use NodeKind::*;
        match node.kind {
            Failure => String::new(),
            Type => node.children.first().map(|c| self.print(c)).unwrap_or_default(),
            Module | Identifier => node.text().unwrap_or_default().to_string(),
            LocalDeclName => self.print_local_decl_name(node),
            Directness => format!("{} ", node.text().unwrap_or_default()),
            Number => node.index().unwrap_or(0).to_string(),
            PrefixOperator => format!("{} prefix", node.text().unwrap_or_default()),
            InfixOperator => format!("{} infix", node.text().unwrap_or_default()),
            PostfixOperator => format!("{} postfix", node.text().unwrap_or_default()),

            Variable | Function | Subscript | Allocator | Constructor | Destructor
            | Deallocator | Getter | Setter | WillSet | DidSet | Addressor | IVarInitializer
            | IVarDestroyer | ExplicitClosure | ImplicitClosure | DefaultArgumentInitializer
            | Initializer | Class | Structure | Enum | Protocol | TypeAlias => {
                self.print_entity(node)
            }

            BuiltinTypeName | ErrorType | DynamicSelf | ArchetypeRef | SelfTypeRef
            | AssociatedTypeRef | QualifiedArchetype | InOut | Weak | Unowned | Unmanaged
            | Metatype | ExistentialMetatype | ProtocolList | FunctionType | ObjCBlock
            | AutoClosureType | UncurriedFunctionType | ArgumentTuple | ReturnType
            | NonVariadicTuple | VariadicTuple | TupleElement | TupleElementName
            | BoundGenericClass | BoundGenericStructure | BoundGenericEnum
            | DependentGenericParamType | DependentMemberType | GenericType | TypeList => {
                self.print_type_like(node)
            }

            Generics | ArchetypeAndProtocol | DependentGenericSignature
            | DependentGenericConformanceRequirement | DependentGenericSameTypeRequirement
            | ProtocolConformance | SpecializedAttribute | SpecializationParam => {
                self.print_generic_construct(node)
            }

            ObjCAttribute => "@objc ".to_string(),
            NonObjCAttribute => "@!objc ".to_string(),

            TypeMetadata | GenericTypeMetadataPattern | Metaclass | NominalTypeDescriptor
            | ValueWitness | ValueWitnessTable | WitnessTableOffset | FieldOffset
            | ProtocolWitnessTable | LazyProtocolWitnessTableAccessor
            | LazyProtocolWitnessTableTemplate | DependentProtocolWitnessTableGenerator
            | DependentProtocolWitnessTableTemplate | ProtocolWitness | ReabstractionThunk
            | ReabstractionThunkHelper | PartialApplyForwarder | PartialApplyObjCForwarder => {
                self.print_meta(node)
            }

            ImplFunctionType => self.print_impl_function_type(node),
            ImplConvention | ImplFunctionAttribute => node.text().unwrap_or_default().to_string(),
            ImplParameter | ImplResult => node
                .children
                .iter()
                .map(|c| self.print(c))
                .collect::<Vec<_>>()
                .join(" "),

            Global | Suffix | DeclContext | Unknown | DependentGenericParamCount => String::new(),

            // `NodeKind` is `#[non_exhaustive]` from this crate's point of
            // view, and a few tags (`ThinFunctionType`,
            // `VariableInitializationExpression`) are carried for
            // completeness but never constructed by the parser.
            _ => String::new(),
        }
    }

    fn print_local_decl_name(&self, node: &OwnedNode) -> String {
        let Some(index_node) = node.children.first() else {
            return String::new();
        };
        let index = index_node.index().unwrap_or(0);
        format!("({} #{})", node.text().unwrap_or_default(), index + 1)
    }

    pub(crate) fn print_context(&self, context: &OwnedNode) -> String {
        format!("{}.", self.print(context))
    }
}
