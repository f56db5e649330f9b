//! Query tree definitions
//!
//! The canonical, serializable representation of a logical expression. Both the
//! DSL parser and the builder API produce these nodes, and two trees are equal
//! exactly when their serialized forms are equal.
//!
//! Serialized shape:
//!
//! ```json
//! {"type": "or", "clauses": [
//!   {"type": "condition", "quantifier": "all", "op": "greater", "path": "store.book[*].price", "value": 5},
//!   {"type": "not", "clause": {"type": "condition", "quantifier": "any", "op": "exists", "path": "archived"}}
//! ]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::QueryResult;

/// Quantifier applied over the values a path resolves to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// At least one value must satisfy the predicate; no values is false
    #[default]
    Any,
    /// Every value must satisfy the predicate; no values is true
    All,
}

impl Quantifier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Quantifier::Any => "any",
            Quantifier::All => "all",
        }
    }
}

/// Second argument of a predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// Regular expression pattern, serialized as `{"regex": "..."}`
    Regex { regex: String },
    Bool(bool),
    /// Integer or float, representation preserved
    Number(Number),
    String(String),
}

impl Operand {
    /// Regular expression operand
    pub fn regex(pattern: impl Into<String>) -> Self {
        Operand::Regex {
            regex: pattern.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::String(s) => Some(s),
            _ => None,
        }
    }

    /// Pattern text of a regex operand
    #[must_use]
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Operand::Regex { regex } => Some(regex),
            _ => None,
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::String(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::String(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        Operand::Number(value)
    }
}

macro_rules! operand_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Number(Number::from(value))
                }
            }
        )*
    };
}

operand_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Operand {
    /// Non-finite floats have no JSON number form and become their string spelling
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Operand::String(value.to_string()), Operand::Number)
    }
}

/// Leaf node: quantifier, operator, path and optional operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub quantifier: Quantifier,
    /// Operator name, looked up in the predicate registry
    pub op: String,
    /// Path expression, passed verbatim to the path resolver
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Operand>,
}

impl Condition {
    pub fn new(
        quantifier: Quantifier,
        op: impl Into<String>,
        path: impl Into<String>,
        value: Option<Operand>,
    ) -> Self {
        Self {
            quantifier,
            op: op.into(),
            path: path.into(),
            value,
        }
    }
}

/// Query tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Condition(Condition),
    And { clauses: Vec<Node> },
    Or { clauses: Vec<Node> },
    Not { clause: Box<Node> },
}

impl Node {
    /// Leaf node constructor
    pub fn condition(
        quantifier: Quantifier,
        op: impl Into<String>,
        path: impl Into<String>,
        value: Option<Operand>,
    ) -> Self {
        Node::Condition(Condition::new(quantifier, op, path, value))
    }

    /// Conjunction of `self` and `other`
    ///
    /// If `self` is already an `And`, `other` is appended to its clauses, so
    /// `a.and(b).and(c)` is the same tree the parser builds for `a and b and c`.
    #[must_use]
    pub fn and(self, other: Node) -> Node {
        match self {
            Node::And { mut clauses } => {
                clauses.push(other);
                Node::And { clauses }
            }
            node => Node::And {
                clauses: vec![node, other],
            },
        }
    }

    /// Disjunction of `self` and `other`, appending to an existing `Or`
    #[must_use]
    pub fn or(self, other: Node) -> Node {
        match self {
            Node::Or { mut clauses } => {
                clauses.push(other);
                Node::Or { clauses }
            }
            node => Node::Or {
                clauses: vec![node, other],
            },
        }
    }

    /// Logical negation
    #[must_use]
    pub fn negate(self) -> Node {
        Node::Not {
            clause: Box::new(self),
        }
    }

    /// `And` over an explicit clause list, kept exactly as given
    ///
    /// Unlike [`Node::and`], nested `And` clauses are not folded, so the tree
    /// may differ from what the parser builds for the rendered text.
    #[must_use]
    pub fn all_of(clauses: Vec<Node>) -> Node {
        Node::And { clauses }
    }

    /// `Or` over an explicit clause list, kept exactly as given
    #[must_use]
    pub fn any_of(clauses: Vec<Node>) -> Node {
        Node::Or { clauses }
    }

    /// Serialized type discriminator
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Condition(_) => "condition",
            Node::And { .. } => "and",
            Node::Or { .. } => "or",
            Node::Not { .. } => "not",
        }
    }

    /// Number of condition leaves in the tree
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Node::Condition(_) => 1,
            Node::And { clauses } | Node::Or { clauses } => {
                clauses.iter().map(Node::condition_count).sum()
            }
            Node::Not { clause } => clause.condition_count(),
        }
    }

    /// Serialize to a JSON value
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` if serde fails.
    pub fn to_value(&self) -> QueryResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to compact JSON text
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` if serde fails.
    pub fn to_json(&self) -> QueryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON text
    ///
    /// The result is not checked against a registry; use the evaluator's
    /// `validate` before trusting a foreign tree.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` for malformed JSON or an unknown `type`.
    pub fn from_json(text: &str) -> QueryResult<Node> {
        Ok(serde_json::from_str(text)?)
    }

    /// Deserialize from a JSON value
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` for an unknown `type` or missing fields.
    pub fn from_value(value: serde_json::Value) -> QueryResult<Node> {
        Ok(serde_json::from_value(value)?)
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}
