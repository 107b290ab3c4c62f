//! Traversal options and their resolution from loosely typed configuration

use derive_more::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ForeachError;

/// Field name used to find descendants when none is configured
pub const DEFAULT_CHILDREN_KEY: &str = "children";

/// The order in which nodes are visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Visit a node before its children (top-down)
    #[default]
    #[display(fmt = "pre")]
    Pre,

    /// Visit a node after all of its descendants (bottom-up)
    #[display(fmt = "post")]
    Post,

    /// Visit level by level
    #[display(fmt = "breadth")]
    Breadth,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 3] = [Strategy::Pre, Strategy::Post, Strategy::Breadth];
}

impl FromStr for Strategy {
    type Err = ForeachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" => Ok(Strategy::Pre),
            "post" => Ok(Strategy::Post),
            "breadth" => Ok(Strategy::Breadth),
            other => Err(ForeachError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Resolved options for a single traversal
///
/// Built once per call and never changed while the traversal runs.
///
/// # Example
///
/// ```
/// use tree_foreach::{ForeachOptions, Strategy};
///
/// let options = ForeachOptions::new()
///     .children_key("kids")
///     .strategy(Strategy::Breadth);
/// assert_eq!(options.get_children_key(), "kids");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawOptions", rename_all = "camelCase")
)]
pub struct ForeachOptions {
    children_key: String,
    strategy: Strategy,
}

impl Default for ForeachOptions {
    fn default() -> Self {
        Self {
            children_key: DEFAULT_CHILDREN_KEY.to_string(),
            strategy: Strategy::default(),
        }
    }
}

impl ForeachOptions {
    /// Options with the default children key and pre-order strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field name that holds a node's children
    pub fn children_key(mut self, key: impl Into<String>) -> Self {
        self.children_key = key.into();
        self
    }

    /// Set the traversal strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn get_children_key(&self) -> &str {
        &self.children_key
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Resolve options from optional string tokens
    ///
    /// Missing values fall back to `"children"` and `"pre"`.
    pub fn parse(
        children_key: Option<&str>,
        strategy: Option<&str>,
    ) -> Result<Self, ForeachError> {
        RawOptions {
            children_key: children_key.map(str::to_string),
            strategy: strategy.map(str::to_string),
        }
        .resolve()
    }
}

/// Unresolved options as they appear in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RawOptions {
    pub children_key: Option<String>,
    pub strategy: Option<String>,
}

impl RawOptions {
    /// Apply defaults and validate
    pub fn resolve(self) -> Result<ForeachOptions, ForeachError> {
        let strategy = match self.strategy.as_deref() {
            Some(token) => token.parse()?,
            None => Strategy::default(),
        };

        let children_key = match self.children_key {
            Some(key) if key.is_empty() => return Err(ForeachError::EmptyChildrenKey),
            Some(key) => key,
            None => DEFAULT_CHILDREN_KEY.to_string(),
        };

        Ok(ForeachOptions {
            children_key,
            strategy,
        })
    }
}

impl TryFrom<RawOptions> for ForeachOptions {
    type Error = ForeachError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        raw.resolve()
    }
}
