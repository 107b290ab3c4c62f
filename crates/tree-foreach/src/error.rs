use derive_more::Display;

/// Errors raised while resolving traversal options
///
/// These are configuration problems only. They are always reported before the
/// first node is visited.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ForeachError {
    /// The strategy token is not one of `pre`, `post` or `breadth`
    #[display(fmt = "unknown traversal strategy `{}` (expected pre, post or breadth)", _0)]
    UnknownStrategy(String),

    /// The children key was given but is empty
    #[display(fmt = "children key must not be empty")]
    EmptyChildrenKey,
}

impl std::error::Error for ForeachError {}
