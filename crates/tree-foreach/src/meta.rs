//! Positional data handed to the callback alongside each node

use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// Ancestor chain from the tree root down to the immediate parent
pub(crate) type Parents<'a, N> = SmallVec<[&'a N; 8]>;

/// Where a visited node sits in its tree
///
/// Every step builds its own record, so a chain handed out for one node is
/// never changed by visits to its siblings or descendants.
pub struct VisitMeta<'a, N> {
    parents: Parents<'a, N>,
    children_key: Rc<str>,
}

impl<'a, N> VisitMeta<'a, N> {
    /// Metadata for a tree root
    pub(crate) fn root(children_key: Rc<str>) -> Self {
        Self {
            parents: SmallVec::new(),
            children_key,
        }
    }

    /// Metadata for a child of `node`, where `self` describes `node`
    pub(crate) fn child_of(&self, node: &'a N) -> Self {
        let mut parents = SmallVec::with_capacity(self.parents.len() + 1);
        parents.extend_from_slice(&self.parents);
        parents.push(node);
        Self {
            parents,
            children_key: Rc::clone(&self.children_key),
        }
    }

    /// Distance from the tree root (root = 0)
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Ancestors ordered from the tree root to the immediate parent
    ///
    /// Empty for a root.
    pub fn parents(&self) -> &[&'a N] {
        &self.parents
    }

    /// The immediate parent, `None` for a root
    pub fn parent(&self) -> Option<&'a N> {
        self.parents.last().copied()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// The field name children were read from
    pub fn children_key(&self) -> &str {
        &self.children_key
    }
}

impl<N> Clone for VisitMeta<'_, N> {
    fn clone(&self) -> Self {
        Self {
            parents: self.parents.clone(),
            children_key: Rc::clone(&self.children_key),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for VisitMeta<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitMeta")
            .field("depth", &self.depth())
            .field("parents", &self.parents)
            .field("children_key", &self.children_key)
            .finish()
    }
}
