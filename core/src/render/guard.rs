use alloc::vec::Vec;
use typexpr_types::TypeNode;

/// Nodes on the active recursion path, outermost first.
///
/// Lookups are a linear scan by identity. Composite types without names
/// rarely nest deeply, so this beats hashing in practice.
pub(crate) struct VisitPath<'a> {
    nodes: Vec<&'a TypeNode<'a>>,
}

impl<'a> VisitPath<'a> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(8),
        }
    }

    pub(crate) fn contains(&self, node: &TypeNode<'_>) -> bool {
        self.nodes.iter().any(|n| n.same(node))
    }

    pub(crate) fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// Push `node` and return the mark to [`VisitPath::leave`] with once its
    /// children are done. Siblings must not see each other on the path.
    pub(crate) fn enter(&mut self, node: &'a TypeNode<'a>) -> usize {
        let mark = self.nodes.len();
        self.nodes.push(node);
        mark
    }

    pub(crate) fn leave(&mut self, mark: usize) {
        self.nodes.truncate(mark);
    }
}
