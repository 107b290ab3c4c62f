//! Lazy traversal over a tree or forest
//!
//! Each strategy keeps its own pending work in an explicit stack or queue, so
//! the depth of a tree is limited by heap memory rather than the call stack.

mod breadth;
mod post;
mod pre;

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::meta::VisitMeta;
use crate::node::TreeNode;
use crate::options::{ForeachOptions, Strategy};

use breadth::BreadthFirst;
use post::PostOrder;
use pre::PreOrder;

/// A visited node together with its metadata
pub type Visit<'a, N> = (&'a N, VisitMeta<'a, N>);

/// Pending work for one strategy within a single tree
pub(crate) trait Frontier<'a, N> {
    /// Start a new tree at `root`
    fn seed(&mut self, root: &'a N, meta: VisitMeta<'a, N>);

    /// The next node in this strategy's order, or `None` once the tree is done
    fn next_visit(&mut self, children_key: &str) -> Option<Visit<'a, N>>;
}

enum Walker<'a, N> {
    Pre(PreOrder<'a, N>),
    Post(PostOrder<'a, N>),
    Breadth(BreadthFirst<'a, N>),
}

impl<'a, N: TreeNode> Walker<'a, N> {
    fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Pre => Walker::Pre(PreOrder::new()),
            Strategy::Post => Walker::Post(PostOrder::new()),
            Strategy::Breadth => Walker::Breadth(BreadthFirst::new()),
        }
    }

    fn seed(&mut self, root: &'a N, meta: VisitMeta<'a, N>) {
        match self {
            Walker::Pre(walker) => walker.seed(root, meta),
            Walker::Post(walker) => walker.seed(root, meta),
            Walker::Breadth(walker) => walker.seed(root, meta),
        }
    }

    fn next_visit(&mut self, children_key: &str) -> Option<Visit<'a, N>> {
        match self {
            Walker::Pre(walker) => walker.next_visit(children_key),
            Walker::Post(walker) => walker.next_visit(children_key),
            Walker::Breadth(walker) => walker.next_visit(children_key),
        }
    }
}

/// Iterator over every node of a tree or forest in the order chosen by
/// [`Strategy`]
///
/// Forest members are walked one after another; each starts with an empty
/// ancestor chain and no two trees are interleaved, even breadth-first.
///
/// Created by [`crate::walk`] and [`crate::walk_forest`].
pub struct Walk<'a, N> {
    roots: std::slice::Iter<'a, N>,
    children_key: Rc<str>,
    walker: Walker<'a, N>,
}

impl<'a, N: TreeNode> Walk<'a, N> {
    pub(crate) fn new(roots: &'a [N], options: &ForeachOptions) -> Self {
        Self {
            roots: roots.iter(),
            children_key: Rc::from(options.get_children_key()),
            walker: Walker::new(options.get_strategy()),
        }
    }
}

impl<'a, N: TreeNode> Iterator for Walk<'a, N> {
    type Item = Visit<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(visit) = self.walker.next_visit(&self.children_key) {
                return Some(visit);
            }

            let root = self.roots.next()?;
            self.walker
                .seed(root, VisitMeta::root(Rc::clone(&self.children_key)));
        }
    }
}

impl<N: TreeNode> FusedIterator for Walk<'_, N> {}
