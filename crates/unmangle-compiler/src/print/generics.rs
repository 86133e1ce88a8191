//! Generic-signature and specialization printing.

use unmangle_core::{NodeKind, OwnedNode};

use super::Printer;

impl Printer<'_> {
    pub(super) fn print_generic_construct(&self, node: &OwnedNode) -> String {
        use NodeKind::*;
        match node.kind {
            Generics => self.print_generics(node),
            ArchetypeAndProtocol => {
                format!("{} : {}", self.print(&node.children[0]), self.print(&node.children[1]))
            }
            DependentGenericSignature => self.print_dependent_generic_signature(node),
            DependentGenericConformanceRequirement => {
                format!("{}: {}", self.print(&node.children[0]), self.print(&node.children[1]))
            }
            DependentGenericSameTypeRequirement => {
                format!("{} == {}", self.print(&node.children[0]), self.print(&node.children[1]))
            }
            ProtocolConformance => {
                format!("{} : {}", self.print(&node.children[0]), self.print(&node.children[1]))
            }
            SpecializedAttribute => self.print_specialized_attribute(node),
            SpecializationParam => self.print_specialization_param(node),
            _ => String::new(),
        }
    }

    fn print_generics(&self, node: &OwnedNode) -> String {
        if node.children.is_empty() {
            return String::new();
        }
        let parts = node.children.iter().map(|c| self.print(c)).collect::<Vec<_>>().join(", ");
        format!("<{parts}>")
    }

    /// Expands the leading run of per-depth `DependentGenericParamCount`
    /// children into `T_depth_index` names, then lists the remaining
    /// requirement children after `where`.
    fn print_dependent_generic_signature(&self, node: &OwnedNode) -> String {
        let mut params = Vec::new();
        let mut requirements = Vec::new();
        let mut depth = 0u64;
        for child in &node.children {
            if child.kind == NodeKind::DependentGenericParamCount {
                let count = child.index().unwrap_or(0);
                for index in 0..count {
                    params.push(format!("T_{depth}_{index}"));
                }
                depth += 1;
            } else {
                requirements.push(self.print(child));
            }
        }
        let mut out = format!("<{}", params.join(", "));
        if !requirements.is_empty() {
            out.push_str(" where ");
            out.push_str(&requirements.join(", "));
        }
        out.push('>');
        out
    }

    fn print_specialized_attribute(&self, node: &OwnedNode) -> String {
        let params = node.children.iter().map(|p| self.print(p)).collect::<Vec<_>>().join(", ");
        format!("specialization <{params}> of ")
    }

    fn print_specialization_param(&self, node: &OwnedNode) -> String {
        let mut out = self.print(&node.children[0]);
        let conformances: Vec<String> = node.children[1..].iter().map(|c| self.print(c)).collect();
        if !conformances.is_empty() {
            out.push_str(" with ");
            out.push_str(&conformances.join(" and "));
        }
        out
    }
}
