//! Metadata, witness-table, and thunk printing.

use unmangle_core::{NodeKind, OwnedNode};

use super::Printer;

impl Printer<'_> {
    pub(super) fn print_meta(&self, node: &OwnedNode) -> String {
        use NodeKind::*;
        match node.kind {
            TypeMetadata => format!(
                "{}type metadata for {}",
                self.print(&node.children[0]),
                self.print(&node.children[1])
            ),
            GenericTypeMetadataPattern => format!(
                "{}generic type metadata pattern for {}",
                self.print(&node.children[0]),
                self.print(&node.children[1])
            ),
            Metaclass => format!("metaclass for {}", self.print(&node.children[0])),
            NominalTypeDescriptor => format!("nominal type descriptor for {}", self.print(&node.children[0])),
            ValueWitness => format!(
                "{} value witness for {}",
                node.text().unwrap_or_default(),
                self.print(&node.children[0])
            ),
            ValueWitnessTable => format!("value witness table for {}", self.print(&node.children[0])),
            WitnessTableOffset => format!("witness table offset for {}", self.print(&node.children[0])),
            FieldOffset => self.print_field_offset(node),
            ProtocolWitnessTable => format!("protocol witness table for {}", self.print(&node.children[0])),
            LazyProtocolWitnessTableAccessor => {
                format!("lazy protocol witness table accessor for {}", self.print(&node.children[0]))
            }
            LazyProtocolWitnessTableTemplate => {
                format!("lazy protocol witness table template for {}", self.print(&node.children[0]))
            }
            DependentProtocolWitnessTableGenerator => format!(
                "dependent protocol witness table generator for {}",
                self.print(&node.children[0])
            ),
            DependentProtocolWitnessTableTemplate => format!(
                "dependent protocol witness table template for {}",
                self.print(&node.children[0])
            ),
            ProtocolWitness => format!(
                "protocol witness for {} in conformance {}",
                self.print(&node.children[1]),
                self.print(&node.children[0])
            ),
            ReabstractionThunk => self.print_reabstraction_thunk(node, "reabstraction thunk"),
            ReabstractionThunkHelper => self.print_reabstraction_thunk(node, "reabstraction thunk helper"),
            PartialApplyForwarder => self.print_partial_apply(node, "partial apply forwarder"),
            PartialApplyObjCForwarder => self.print_partial_apply(node, "partial apply ObjC forwarder"),
            _ => String::new(),
        }
    }

    fn print_reabstraction_thunk(&self, node: &OwnedNode, label: &str) -> String {
        let has_generics = node.children.len() == 3;
        let generics = if has_generics {
            format!("{} ", self.print(&node.children[0]))
        } else {
            String::new()
        };
        let src = &node.children[node.children.len() - 2];
        let dest = &node.children[node.children.len() - 1];
        format!("{label} {generics}from {} to {}", self.print(src), self.print(dest))
    }

    fn print_field_offset(&self, node: &OwnedNode) -> String {
        let directness = self.print(&node.children[0]);
        let entity = &node.children[1];
        let entity_text = if self.options.display_type_of_ivar_field_offset {
            self.print(entity)
        } else {
            self.print_entity_no_type(entity)
        };
        format!("{directness}field offset for {entity_text}")
    }

    fn print_partial_apply(&self, node: &OwnedNode, label: &str) -> String {
        match node.children.first() {
            Some(entity) => format!("{label} for {}", self.print(entity)),
            None => label.to_string(),
        }
    }
}
