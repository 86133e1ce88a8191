//! The closed set of node kinds that can appear in a demangling tree.

/// Tag of a [`Node`](crate::Node) / [`OwnedNode`](crate::OwnedNode).
///
/// The set is fixed: a demangling tree never contains a kind outside this
/// enum, and a given kind only ever appears at the positions its grammar
/// production permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum NodeKind {
    Global,

    // Entities
    Function,
    Variable,
    Subscript,
    Initializer,
    Allocator,
    Constructor,
    Destructor,
    Deallocator,
    Getter,
    Setter,
    WillSet,
    DidSet,
    Addressor,
    IVarInitializer,
    IVarDestroyer,
    ExplicitClosure,
    ImplicitClosure,
    DefaultArgumentInitializer,
    VariableInitializationExpression,

    // Contexts / names
    Module,
    Identifier,
    LocalDeclName,
    PrefixOperator,
    InfixOperator,
    PostfixOperator,
    DeclContext,

    // Nominal types
    Class,
    Structure,
    Enum,
    Protocol,
    TypeAlias,
    BoundGenericClass,
    BoundGenericStructure,
    BoundGenericEnum,

    // Types
    TypeList,
    Type,
    ArgumentTuple,
    ReturnType,
    NonVariadicTuple,
    VariadicTuple,
    TupleElement,
    TupleElementName,
    FunctionType,
    UncurriedFunctionType,
    AutoClosureType,
    ObjCBlock,
    ThinFunctionType,
    Metatype,
    ExistentialMetatype,
    ProtocolList,
    ArchetypeRef,
    SelfTypeRef,
    AssociatedTypeRef,
    QualifiedArchetype,
    GenericType,
    Generics,
    ArchetypeAndProtocol,
    DependentGenericSignature,
    DependentGenericParamCount,
    DependentGenericParamType,
    DependentGenericConformanceRequirement,
    DependentGenericSameTypeRequirement,
    DependentGenericType,
    DependentMemberType,
    DynamicSelf,
    InOut,
    Weak,
    Unowned,
    Unmanaged,
    BuiltinTypeName,
    ErrorType,
    Number,

    // Misc leaves
    Suffix,
    Failure,

    // Attributes
    ObjCAttribute,
    NonObjCAttribute,
    SpecializedAttribute,
    SpecializationParam,

    // Metadata / witness-table family
    TypeMetadata,
    GenericTypeMetadataPattern,
    Metaclass,
    NominalTypeDescriptor,
    ValueWitness,
    ValueWitnessTable,
    WitnessTableOffset,
    FieldOffset,
    ProtocolWitnessTable,
    LazyProtocolWitnessTableAccessor,
    LazyProtocolWitnessTableTemplate,
    DependentProtocolWitnessTableGenerator,
    DependentProtocolWitnessTableTemplate,
    ProtocolWitness,
    ProtocolConformance,
    Directness,

    // Thunks / forwarders
    ReabstractionThunk,
    ReabstractionThunkHelper,
    PartialApplyForwarder,
    PartialApplyObjCForwarder,

    // Impl-function-type (ABI signatures)
    ImplFunctionType,
    ImplConvention,
    ImplFunctionAttribute,
    ImplParameter,
    ImplResult,

    Unknown,
}

impl NodeKind {
    /// Canonical, stable name. Used for debug output and the CLI's `--json` dump;
    /// never parsed back, so it is free to diverge from the Rust identifier.
    pub const fn name(self) -> &'static str {
        use NodeKind::*;
        match self {
            Global => "Global",
            Function => "Function",
            Variable => "Variable",
            Subscript => "Subscript",
            Initializer => "Initializer",
            Allocator => "Allocator",
            Constructor => "Constructor",
            Destructor => "Destructor",
            Deallocator => "Deallocator",
            Getter => "Getter",
            Setter => "Setter",
            WillSet => "WillSet",
            DidSet => "DidSet",
            Addressor => "Addressor",
            IVarInitializer => "IVarInitializer",
            IVarDestroyer => "IVarDestroyer",
            ExplicitClosure => "ExplicitClosure",
            ImplicitClosure => "ImplicitClosure",
            DefaultArgumentInitializer => "DefaultArgumentInitializer",
            VariableInitializationExpression => "VariableInitializationExpression",
            Module => "Module",
            Identifier => "Identifier",
            LocalDeclName => "LocalDeclName",
            PrefixOperator => "PrefixOperator",
            InfixOperator => "InfixOperator",
            PostfixOperator => "PostfixOperator",
            DeclContext => "DeclContext",
            Class => "Class",
            Structure => "Structure",
            Enum => "Enum",
            Protocol => "Protocol",
            TypeAlias => "TypeAlias",
            BoundGenericClass => "BoundGenericClass",
            BoundGenericStructure => "BoundGenericStructure",
            BoundGenericEnum => "BoundGenericEnum",
            TypeList => "TypeList",
            Type => "Type",
            ArgumentTuple => "ArgumentTuple",
            ReturnType => "ReturnType",
            NonVariadicTuple => "NonVariadicTuple",
            VariadicTuple => "VariadicTuple",
            TupleElement => "TupleElement",
            TupleElementName => "TupleElementName",
            FunctionType => "FunctionType",
            UncurriedFunctionType => "UncurriedFunctionType",
            AutoClosureType => "AutoClosureType",
            ObjCBlock => "ObjCBlock",
            ThinFunctionType => "ThinFunctionType",
            Metatype => "Metatype",
            ExistentialMetatype => "ExistentialMetatype",
            ProtocolList => "ProtocolList",
            ArchetypeRef => "ArchetypeRef",
            SelfTypeRef => "SelfTypeRef",
            AssociatedTypeRef => "AssociatedTypeRef",
            QualifiedArchetype => "QualifiedArchetype",
            GenericType => "GenericType",
            Generics => "Generics",
            ArchetypeAndProtocol => "ArchetypeAndProtocol",
            DependentGenericSignature => "DependentGenericSignature",
            DependentGenericParamCount => "DependentGenericParamCount",
            DependentGenericParamType => "DependentGenericParamType",
            DependentGenericConformanceRequirement => "DependentGenericConformanceRequirement",
            DependentGenericSameTypeRequirement => "DependentGenericSameTypeRequirement",
            DependentGenericType => "DependentGenericType",
            DependentMemberType => "DependentMemberType",
            DynamicSelf => "DynamicSelf",
            InOut => "InOut",
            Weak => "Weak",
            Unowned => "Unowned",
            Unmanaged => "Unmanaged",
            BuiltinTypeName => "BuiltinTypeName",
            ErrorType => "ErrorType",
            Number => "Number",
            Suffix => "Suffix",
            Failure => "Failure",
            ObjCAttribute => "ObjCAttribute",
            NonObjCAttribute => "NonObjCAttribute",
            SpecializedAttribute => "SpecializedAttribute",
            SpecializationParam => "SpecializationParam",
            TypeMetadata => "TypeMetadata",
            GenericTypeMetadataPattern => "GenericTypeMetadataPattern",
            Metaclass => "Metaclass",
            NominalTypeDescriptor => "NominalTypeDescriptor",
            ValueWitness => "ValueWitness",
            ValueWitnessTable => "ValueWitnessTable",
            WitnessTableOffset => "WitnessTableOffset",
            FieldOffset => "FieldOffset",
            ProtocolWitnessTable => "ProtocolWitnessTable",
            LazyProtocolWitnessTableAccessor => "LazyProtocolWitnessTableAccessor",
            LazyProtocolWitnessTableTemplate => "LazyProtocolWitnessTableTemplate",
            DependentProtocolWitnessTableGenerator => "DependentProtocolWitnessTableGenerator",
            DependentProtocolWitnessTableTemplate => "DependentProtocolWitnessTableTemplate",
            ProtocolWitness => "ProtocolWitness",
            ProtocolConformance => "ProtocolConformance",
            Directness => "Directness",
            ReabstractionThunk => "ReabstractionThunk",
            ReabstractionThunkHelper => "ReabstractionThunkHelper",
            PartialApplyForwarder => "PartialApplyForwarder",
            PartialApplyObjCForwarder => "PartialApplyObjCForwarder",
            ImplFunctionType => "ImplFunctionType",
            ImplConvention => "ImplConvention",
            ImplFunctionAttribute => "ImplFunctionAttribute",
            ImplParameter => "ImplParameter",
            ImplResult => "ImplResult",
            Unknown => "Unknown",
        }
    }

    /// Nominal-type kinds eligible for the `G`-prefixed bound-generic production;
    /// see the `BoundGeneric*` family in [`NodeKind`] and `parser::types::parse_bound_generic`.
    pub const fn bound_generic_counterpart(self) -> Option<NodeKind> {
        match self {
            NodeKind::Class => Some(NodeKind::BoundGenericClass),
            NodeKind::Structure => Some(NodeKind::BoundGenericStructure),
            NodeKind::Enum => Some(NodeKind::BoundGenericEnum),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
