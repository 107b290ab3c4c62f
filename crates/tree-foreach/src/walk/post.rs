use crate::meta::VisitMeta;
use crate::node::TreeNode;
use crate::walk::{Frontier, Visit};

struct Frame<'a, N> {
    node: &'a N,
    meta: VisitMeta<'a, N>,
    /// Children have already been pushed above this frame
    expanded: bool,
}

/// Depth-first, children before parent
///
/// A frame stays on the stack until every descendant above it has been
/// emitted, at every level of the tree.
pub(crate) struct PostOrder<'a, N> {
    stack: Vec<Frame<'a, N>>,
}

impl<N> PostOrder<'_, N> {
    pub(crate) fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<'a, N: TreeNode> Frontier<'a, N> for PostOrder<'a, N> {
    fn seed(&mut self, root: &'a N, meta: VisitMeta<'a, N>) {
        self.stack.push(Frame {
            node: root,
            meta,
            expanded: false,
        });
    }

    fn next_visit(&mut self, children_key: &str) -> Option<Visit<'a, N>> {
        loop {
            let top = self.stack.last_mut()?;
            if top.expanded {
                let frame = self.stack.pop()?;
                return Some((frame.node, frame.meta));
            }

            top.expanded = true;
            let node = top.node;

            if let Some(children) = node.children(children_key) {
                let child_meta = top.meta.child_of(node);
                for child in children.iter().rev() {
                    self.stack.push(Frame {
                        node: child,
                        meta: child_meta.clone(),
                        expanded: false,
                    });
                }
            }
        }
    }
}
