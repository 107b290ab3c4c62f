use crate::meta::VisitMeta;
use crate::node::TreeNode;
use crate::walk::{Frontier, Visit};

/// Depth-first, parent before children
///
/// Children are pushed in reverse so they pop in array order.
pub(crate) struct PreOrder<'a, N> {
    stack: Vec<Visit<'a, N>>,
}

impl<N> PreOrder<'_, N> {
    pub(crate) fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<'a, N: TreeNode> Frontier<'a, N> for PreOrder<'a, N> {
    fn seed(&mut self, root: &'a N, meta: VisitMeta<'a, N>) {
        self.stack.push((root, meta));
    }

    fn next_visit(&mut self, children_key: &str) -> Option<Visit<'a, N>> {
        let (node, meta) = self.stack.pop()?;

        if let Some(children) = node.children(children_key) {
            for child in children.iter().rev() {
                self.stack.push((child, meta.child_of(node)));
            }
        }

        Some((node, meta))
    }
}
