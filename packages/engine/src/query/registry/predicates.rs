//! Built-in predicate functions
//!
//! Every predicate is total: a value or operand of the wrong type makes the
//! predicate false instead of raising.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::regex_cache::REGEX_CACHE;
use crate::query::ast::Operand;

/// `equals`: numbers compare numerically, strings and booleans by value
pub fn equals(value: &Value, operand: Option<&Operand>) -> bool {
    match (value, operand) {
        (Value::Number(a), Some(Operand::Number(b))) => {
            compare_numbers(a, b) == Some(Ordering::Equal)
        }
        (Value::String(a), Some(Operand::String(b))) => a == b,
        (Value::Bool(a), Some(Operand::Bool(b))) => a == b,
        _ => false,
    }
}

/// `greater`: numeric or lexicographic `>`
pub fn greater(value: &Value, operand: Option<&Operand>) -> bool {
    ordering(value, operand) == Some(Ordering::Greater)
}

/// `less`: numeric or lexicographic `<`
pub fn less(value: &Value, operand: Option<&Operand>) -> bool {
    ordering(value, operand) == Some(Ordering::Less)
}

/// `contains`: literal substring, array element or object key; a regex operand
/// searches a string value for the pattern instead
pub fn contains(value: &Value, operand: Option<&Operand>) -> bool {
    match (value, operand) {
        (Value::String(text), Some(Operand::Regex { regex })) => search(regex, text, false),
        (_, Some(Operand::Regex { .. }) | None) => false,
        (Value::String(text), Some(Operand::String(needle))) => text.contains(needle.as_str()),
        (Value::Object(members), Some(Operand::String(key))) => members.contains_key(key),
        (Value::Array(items), Some(_)) => items.iter().any(|item| equals(item, operand)),
        _ => false,
    }
}

/// `matches`: the pattern must match at the start of the value's text form
pub fn matches(value: &Value, operand: Option<&Operand>) -> bool {
    let Some(pattern) = operand.and_then(|o| o.as_pattern().or_else(|| o.as_str())) else {
        return false;
    };
    match value {
        Value::String(text) => search(pattern, text, true),
        Value::Number(_) | Value::Bool(_) => search(pattern, &value.to_string(), true),
        _ => false,
    }
}

/// `exists`: any resolved value satisfies it
pub fn exists(_value: &Value, _operand: Option<&Operand>) -> bool {
    true
}

fn ordering(value: &Value, operand: Option<&Operand>) -> Option<Ordering> {
    match (value, operand?) {
        (Value::Number(a), Operand::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Operand::String(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => None,
    }
}

/// Exact comparison for integers, `f64` otherwise
fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

fn search(pattern: &str, text: &str, anchored: bool) -> bool {
    match REGEX_CACHE.get_or_compile(pattern) {
        Ok(regex) => regex
            .find(text)
            .is_some_and(|m| !anchored || m.start() == 0),
        Err(e) => {
            tracing::warn!(
                target: "dotquery::registry",
                pattern = %pattern,
                error = %e,
                "invalid regex operand, predicate evaluates to false"
            );
            false
        }
    }
}
