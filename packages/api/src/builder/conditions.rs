//! Condition factories
//!
//! Each factory builds an `any` condition; the `all_` variants build the
//! universally quantified form.

use dotquery_engine::query::{Node, Operand, Quantifier};

/// Generic condition for operators outside the built-in set
pub fn condition(
    quantifier: Quantifier,
    op: impl Into<String>,
    path: impl Into<String>,
    value: Option<Operand>,
) -> Node {
    Node::condition(quantifier, op, path, value)
}

fn binary(quantifier: Quantifier, op: &str, path: impl Into<String>, value: Operand) -> Node {
    Node::condition(quantifier, op, path, Some(value))
}

/// Some value at `path` equals `value`
pub fn equals(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::Any, "equals", path, value.into())
}

/// Some value at `path` contains `value`
///
/// A string is a substring, array element or object key test; pass
/// [`Operand::regex`] for a pattern search.
pub fn contains(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::Any, "contains", path, value.into())
}

/// Some value at `path` is greater than `value`
pub fn greater(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::Any, "greater", path, value.into())
}

/// Some value at `path` is less than `value`
pub fn less(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::Any, "less", path, value.into())
}

/// Some value at `path` matches `pattern` from its start
pub fn matches(path: impl Into<String>, pattern: impl Into<String>) -> Node {
    binary(Quantifier::Any, "matches", path, Operand::regex(pattern))
}

/// `path` resolves to at least one value
pub fn exists(path: impl Into<String>) -> Node {
    Node::condition(Quantifier::Any, "exists", path, None)
}

pub fn all_equals(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::All, "equals", path, value.into())
}

pub fn all_contains(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::All, "contains", path, value.into())
}

pub fn all_greater(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::All, "greater", path, value.into())
}

pub fn all_less(path: impl Into<String>, value: impl Into<Operand>) -> Node {
    binary(Quantifier::All, "less", path, value.into())
}

pub fn all_matches(path: impl Into<String>, pattern: impl Into<String>) -> Node {
    binary(Quantifier::All, "matches", path, Operand::regex(pattern))
}

/// Always true: `exists` holds for every resolved value, and no values is vacuous
pub fn all_exists(path: impl Into<String>) -> Node {
    Node::condition(Quantifier::All, "exists", path, None)
}
