//! `ImplFunctionType` printing: the attrs/inputs/results state machine.

use unmangle_core::{NodeKind, OwnedNode};

use super::Printer;

impl Printer<'_> {
    /// Children arrive in a fixed, monotonic order — one `ImplConvention`
    /// (the callee), then `ImplFunctionAttribute`s, an optional `Generics`
    /// clause, then `ImplParameter`s, then `ImplResult`s — so a single pass
    /// sorts them into the three printed groups.
    pub(super) fn print_impl_function_type(&self, node: &OwnedNode) -> String {
        let mut out = String::new();
        let mut generics = String::new();
        let mut params = Vec::new();
        let mut results = Vec::new();

        for child in &node.children {
            match child.kind {
                NodeKind::ImplConvention => out.push_str(&self.print(child)),
                NodeKind::ImplFunctionAttribute => {
                    out.push(' ');
                    out.push_str(&self.print(child));
                }
                NodeKind::Generics => generics = self.print(child),
                NodeKind::ImplParameter => params.push(self.print(child)),
                NodeKind::ImplResult => results.push(self.print(child)),
                _ => {}
            }
        }

        out.push_str(&generics);
        out.push_str(" (");
        out.push_str(&params.join(", "));
        out.push_str(") -> (");
        out.push_str(&results.join(", "));
        out.push(')');
        out
    }
}
