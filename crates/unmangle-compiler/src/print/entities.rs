//! Entity printing: `context.name[.accessor] [: type]`.

use unmangle_core::{NodeKind, OwnedNode};

use super::Printer;

impl Printer<'_> {
    pub(super) fn print_entity(&self, node: &OwnedNode) -> String {
        use NodeKind::*;
        let children = &node.children;
        match node.kind {
            Variable | Function | Subscript => {
                let (context, name, ty) = (&children[0], &children[1], &children[2]);
                self.print_named_entity(context, Some(name), "", Some(ty))
            }
            Allocator => self.print_named_entity(&children[0], None, "__allocating_init", Some(&children[1])),
            Constructor => self.print_named_entity(&children[0], None, "init", Some(&children[1])),
            Destructor => self.print_named_entity(&children[0], None, "deinit", None),
            Deallocator => self.print_named_entity(&children[0], None, "__deallocating_deinit", None),
            IVarInitializer => self.print_named_entity(&children[0], None, "__ivar_initializer", None),
            IVarDestroyer => self.print_named_entity(&children[0], None, "__ivar_destroyer", None),
            Addressor => self.print_accessor(node, ".addressor"),
            Getter => self.print_accessor(node, ".getter"),
            Setter => self.print_accessor(node, ".setter"),
            WillSet => self.print_accessor(node, ".willset"),
            DidSet => self.print_accessor(node, ".didset"),

            ExplicitClosure | ImplicitClosure => {
                let context = &children[0];
                let index = node.index().unwrap_or(0);
                let label = if node.kind == ImplicitClosure { "implicit closure" } else { "closure" };
                let extra = format!("({label} #{})", index + 1);
                self.print_named_entity(context, None, &extra, None)
            }
            DefaultArgumentInitializer => {
                let context = &children[0];
                let index = node.index().unwrap_or(0);
                let extra = format!("(default argument {index})");
                self.print_named_entity(context, None, &extra, None)
            }
            // `i` always yields a bare `[context]`; the generic
            // entity-name fallback can also land here with a name and
            // type attached, which we print like any other named entity.
            Initializer if children.len() == 1 => {
                self.print_named_entity(&children[0], None, "(variable initialization expression)", None)
            }
            Initializer => {
                self.print_named_entity(&children[0], Some(&children[1]), "", Some(&children[2]))
            }

            Class | Structure | Enum | Protocol | TypeAlias => {
                self.print_named_entity(&children[0], Some(&children[1]), "", None)
            }

            _ => String::new(),
        }
    }

    fn print_accessor(&self, node: &OwnedNode, suffix: &str) -> String {
        let children = &node.children;
        self.print_named_entity(&children[0], Some(&children[1]), suffix, Some(&children[2]))
    }

    fn print_named_entity(
        &self,
        context: &OwnedNode,
        name: Option<&OwnedNode>,
        extra: &str,
        ty: Option<&OwnedNode>,
    ) -> String {
        let mut out = self.print_context(context);
        if let Some(name) = name {
            out.push_str(&self.print(name));
        }
        out.push_str(extra);
        if let Some(ty) = ty {
            if self.type_needs_colon_for_decl(ty) {
                out.push_str(" : ");
            } else {
                out.push(' ');
            }
            out.push_str(&self.print(ty));
        }
        out
    }

    /// Same as [`Printer::print`] on an entity, but drops its trailing
    /// `: Type` — used by `FieldOffset` when
    /// `display_type_of_ivar_field_offset` is off.
    pub(super) fn print_entity_no_type(&self, entity: &OwnedNode) -> String {
        use NodeKind::*;
        let children = &entity.children;
        match entity.kind {
            Variable | Function | Subscript => {
                self.print_named_entity(&children[0], Some(&children[1]), "", None)
            }
            Addressor => self.print_named_entity(&children[0], Some(&children[1]), ".addressor", None),
            Getter => self.print_named_entity(&children[0], Some(&children[1]), ".getter", None),
            Setter => self.print_named_entity(&children[0], Some(&children[1]), ".setter", None),
            WillSet => self.print_named_entity(&children[0], Some(&children[1]), ".willset", None),
            DidSet => self.print_named_entity(&children[0], Some(&children[1]), ".didset", None),
            _ => self.print(entity),
        }
    }

    /// Curried function declarations (`GenericType` wrapping an
    /// `UncurriedFunctionType`/`FunctionType`) read naturally without a
    /// colon; everything else gets `: Type`.
    pub(super) fn type_needs_colon_for_decl(&self, ty: &OwnedNode) -> bool {
        let Some(inner) = ty.children.first() else {
            return true;
        };
        match inner.kind {
            NodeKind::UncurriedFunctionType | NodeKind::FunctionType => false,
            NodeKind::GenericType => inner
                .children
                .get(1)
                .and_then(|wrapped| wrapped.children.first())
                .map(|base| !matches!(base.kind, NodeKind::UncurriedFunctionType | NodeKind::FunctionType))
                .unwrap_or(true),
            _ => true,
        }
    }
}
