//! Tree Foreach
//!
//! Visit every node of a tree, or of a forest of trees, exactly once in
//! pre-order, post-order or breadth-first order. Each node is handed to a
//! callback together with its depth and the chain of its ancestors.
//!
//! # Core Concepts
//!
//! - **TreeNode**: anything that can expose its children under a field name
//! - **Strategy**: the visiting order (`pre`, `post` or `breadth`)
//! - **VisitMeta**: depth and ancestors of the node being visited
//!
//! # Example
//!
//! ```
//! use tree_foreach::{foreach, ForeachOptions, Strategy, TreeNode};
//!
//! struct Item {
//!     id: u32,
//!     children: Vec<Item>,
//! }
//!
//! impl TreeNode for Item {
//!     fn children(&self, key: &str) -> Option<&[Self]> {
//!         (key == "children").then_some(self.children.as_slice())
//!     }
//! }
//!
//! let leaf = |id| Item { id, children: Vec::new() };
//! let tree = Item {
//!     id: 1,
//!     children: vec![Item { id: 2, children: vec![leaf(4)] }, leaf(3)],
//! };
//!
//! let mut ids = Vec::new();
//! foreach(&tree, |node, _meta| ids.push(node.id), &ForeachOptions::default());
//! assert_eq!(ids, [1, 2, 4, 3]);
//!
//! let mut ids = Vec::new();
//! let breadth = ForeachOptions::new().strategy(Strategy::Breadth);
//! foreach(&tree, |node, _meta| ids.push(node.id), &breadth);
//! assert_eq!(ids, [1, 2, 3, 4]);
//! ```

mod error;
mod meta;
mod node;
mod options;
mod walk;

use anyhow::Result;

pub use error::ForeachError;
pub use meta::VisitMeta;
pub use node::TreeNode;
pub use options::{ForeachOptions, RawOptions, Strategy, DEFAULT_CHILDREN_KEY};
pub use walk::{Visit, Walk};

/// Split the top-level input into the trees to visit
fn roots<N: TreeNode>(tree: &N) -> &[N] {
    tree.as_forest().unwrap_or(std::slice::from_ref(tree))
}

/// Walk a tree lazily
///
/// If `tree` is itself a sequence (see [`TreeNode::as_forest`]) each element is
/// walked as an independent tree.
pub fn walk<'a, N: TreeNode>(tree: &'a N, options: &ForeachOptions) -> Walk<'a, N> {
    walk_forest(roots(tree), options)
}

/// Walk each tree of a forest lazily, in order
pub fn walk_forest<'a, N: TreeNode>(forest: &'a [N], options: &ForeachOptions) -> Walk<'a, N> {
    log::debug!(
        "walking {} tree(s) with strategy {} via `{}`",
        forest.len(),
        options.get_strategy(),
        options.get_children_key()
    );
    Walk::new(forest, options)
}

/// Call `callback` for every node of `tree`
pub fn foreach<'a, N, F>(tree: &'a N, mut callback: F, options: &ForeachOptions)
where
    N: TreeNode,
    F: FnMut(&'a N, &VisitMeta<'a, N>),
{
    for (node, meta) in walk(tree, options) {
        callback(node, &meta);
    }
}

/// Call `callback` for every node of every tree in `forest`
pub fn foreach_forest<'a, N, F>(forest: &'a [N], mut callback: F, options: &ForeachOptions)
where
    N: TreeNode,
    F: FnMut(&'a N, &VisitMeta<'a, N>),
{
    for (node, meta) in walk_forest(forest, options) {
        callback(node, &meta);
    }
}

/// Like [`foreach`], but stops at the first error returned by `callback`
pub fn try_foreach<'a, N, F>(tree: &'a N, callback: F, options: &ForeachOptions) -> Result<()>
where
    N: TreeNode,
    F: FnMut(&'a N, &VisitMeta<'a, N>) -> Result<()>,
{
    try_foreach_forest(roots(tree), callback, options)
}

/// Like [`foreach_forest`], but stops at the first error returned by `callback`
pub fn try_foreach_forest<'a, N, F>(
    forest: &'a [N],
    mut callback: F,
    options: &ForeachOptions,
) -> Result<()>
where
    N: TreeNode,
    F: FnMut(&'a N, &VisitMeta<'a, N>) -> Result<()>,
{
    for (node, meta) in walk_forest(forest, options) {
        callback(node, &meta)?;
    }
    Ok(())
}
