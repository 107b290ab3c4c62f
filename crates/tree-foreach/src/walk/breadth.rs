use std::collections::VecDeque;

use crate::meta::VisitMeta;
use crate::node::TreeNode;
use crate::walk::{Frontier, Visit};

/// Level order over a single tree
///
/// A dequeued node's children are queued before the node itself is handed
/// out, so the queue never holds more than two levels at once.
pub(crate) struct BreadthFirst<'a, N> {
    queue: VecDeque<Visit<'a, N>>,
}

impl<N> BreadthFirst<'_, N> {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<'a, N: TreeNode> Frontier<'a, N> for BreadthFirst<'a, N> {
    fn seed(&mut self, root: &'a N, meta: VisitMeta<'a, N>) {
        self.queue.push_back((root, meta));
    }

    fn next_visit(&mut self, children_key: &str) -> Option<Visit<'a, N>> {
        let (node, meta) = self.queue.pop_front()?;

        if let Some(children) = node.children(children_key) {
            let child_meta = meta.child_of(node);
            self.queue
                .extend(children.iter().map(|child| (child, child_meta.clone())));
        }

        Some((node, meta))
    }
}
