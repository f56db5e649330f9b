//! Path selector definitions
//!
//! Compiled form of a dotted path: an ordered chain of selectors applied to the
//! document root.

use std::fmt;

/// Individual path selector component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSelector {
    /// Object property (`.name` or `['name']`); numeric names also index arrays
    Child(String),

    /// Array element, negative indices count from the end
    Index(i64),

    /// Array slice with Python-like bounds
    Slice {
        /// Start index (None means from beginning)
        start: Option<i64>,
        /// End index, exclusive (None means to end)
        end: Option<i64>,
    },

    /// Every array element or object value (`[*]`, `.*`)
    Wildcard,

    /// The current node and all of its descendants (`..`)
    Descendants,
}

/// A compiled path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    selectors: Vec<PathSelector>,
    source: String,
}

impl PathExpression {
    #[must_use]
    pub fn new(selectors: Vec<PathSelector>, source: impl Into<String>) -> Self {
        Self {
            selectors,
            source: source.into(),
        }
    }

    /// Selectors in application order; empty means the document root
    #[must_use]
    pub fn selectors(&self) -> &[PathSelector] {
        &self.selectors
    }

    /// The path text this expression was compiled from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True if the path can select more than one value
    #[must_use]
    pub fn is_multi_valued(&self) -> bool {
        self.selectors.iter().any(|s| {
            matches!(
                s,
                PathSelector::Wildcard | PathSelector::Slice { .. } | PathSelector::Descendants
            )
        })
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path('{}')", self.source)
    }
}
