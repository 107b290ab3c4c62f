//! The capability a type needs in order to be traversed

/// A value that may hold child nodes under a named field
///
/// The traverser only ever reads nodes through this trait. Implementations
/// with a fixed schema are free to ignore `key`.
///
/// # Example
///
/// ```
/// use tree_foreach::TreeNode;
///
/// struct Dir {
///     name: String,
///     entries: Vec<Dir>,
/// }
///
/// impl TreeNode for Dir {
///     fn children(&self, key: &str) -> Option<&[Self]> {
///         (key == "entries").then_some(self.entries.as_slice())
///     }
/// }
/// ```
pub trait TreeNode: Sized {
    /// The ordered children stored under `key`
    ///
    /// Returns `None` when the field is absent or does not hold a sequence;
    /// the node is then treated as a leaf.
    fn children(&self, key: &str) -> Option<&[Self]>;

    /// The trees contained in this value when it is itself a sequence
    ///
    /// Only consulted for the top-level input of [`crate::foreach`].
    fn as_forest(&self) -> Option<&[Self]> {
        None
    }
}

#[cfg(feature = "json")]
mod json {
    use super::TreeNode;
    use serde_json::Value;

    impl TreeNode for Value {
        fn children(&self, key: &str) -> Option<&[Self]> {
            let field = self.get(key)?;
            match field.as_array() {
                Some(children) => Some(children.as_slice()),
                None => {
                    log::trace!("field `{}` is not an array, treating node as a leaf", key);
                    None
                }
            }
        }

        fn as_forest(&self) -> Option<&[Self]> {
            self.as_array().map(Vec::as_slice)
        }
    }

}
