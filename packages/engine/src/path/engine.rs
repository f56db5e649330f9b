//! Selector application engine
//!
//! Applies a compiled selector chain to a document, borrowing every match from the
//! input value.

use serde_json::Value;

use super::selectors::{PathExpression, PathSelector};
use crate::config::QueryConfig;
use crate::error::{QueryResult, path_error};

/// Engine for applying selectors to JSON values
pub struct SelectorEngine;

impl SelectorEngine {
    /// Apply every selector of `expression` in sequence, starting at `document`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Path` if the result set grows beyond
    /// `config.max_matches` or a descendant walk exceeds `config.max_depth`.
    pub fn apply<'v>(
        document: &'v Value,
        expression: &PathExpression,
        config: &QueryConfig,
    ) -> QueryResult<Vec<&'v Value>> {
        let mut current = vec![document];

        for selector in expression.selectors() {
            let mut next = Vec::new();
            for value in current {
                Self::apply_selector(value, selector, config, &mut next)
                    .map_err(|reason| path_error(expression.source(), reason))?;

                if next.len() > config.max_matches {
                    log::warn!(
                        "Path '{}' stopped - result set too large ({})",
                        expression.source(),
                        next.len()
                    );
                    return Err(path_error(
                        expression.source(),
                        format!("more than {} matches", config.max_matches),
                    ));
                }
            }

            current = next;
            if current.is_empty() {
                break;
            }
        }

        Ok(current)
    }

    /// Apply a single selector to one value, appending matches to `out`
    fn apply_selector<'v>(
        value: &'v Value,
        selector: &PathSelector,
        config: &QueryConfig,
        out: &mut Vec<&'v Value>,
    ) -> Result<(), String> {
        match selector {
            PathSelector::Child(name) => match value {
                Value::Object(obj) => out.extend(obj.get(name)),
                Value::Array(arr) => {
                    // Dotted numeric segments (`items.0`) index arrays
                    if let Ok(index) = name.parse::<usize>() {
                        out.extend(arr.get(index));
                    }
                }
                _ => {}
            },
            PathSelector::Index(index) => {
                if let Value::Array(arr) = value {
                    out.extend(Self::resolve_index(arr.len(), *index).map(|i| &arr[i]));
                }
            }
            PathSelector::Slice { start, end } => {
                if let Value::Array(arr) = value {
                    let len = i64::try_from(arr.len()).unwrap_or(i64::MAX);
                    let from = Self::normalize_bound(*start, len, 0);
                    let to = Self::normalize_bound(*end, len, len);
                    if from < to {
                        // Both bounds are clamped into 0..=len
                        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                        out.extend(&arr[from as usize..to as usize]);
                    }
                }
            }
            PathSelector::Wildcard => match value {
                Value::Object(obj) => out.extend(obj.values()),
                Value::Array(arr) => out.extend(arr.iter()),
                _ => {}
            },
            PathSelector::Descendants => {
                Self::collect_descendants(value, 0, config.max_depth, out)?;
            }
        }
        Ok(())
    }

    /// Map a possibly negative index onto `0..len`
    fn resolve_index(len: usize, index: i64) -> Option<usize> {
        if index < 0 {
            let back = usize::try_from(index.unsigned_abs()).ok()?;
            len.checked_sub(back)
        } else {
            usize::try_from(index).ok().filter(|i| *i < len)
        }
    }

    /// Normalize slice bound according to Python-like semantics
    fn normalize_bound(bound: Option<i64>, len: i64, default: i64) -> i64 {
        match bound {
            Some(idx) if idx < 0 => (len + idx).max(0),
            Some(idx) => idx.min(len),
            None => default,
        }
    }

    /// Pre-order walk: the node itself, then its children
    fn collect_descendants<'v>(
        value: &'v Value,
        depth: usize,
        max_depth: usize,
        out: &mut Vec<&'v Value>,
    ) -> Result<(), String> {
        if depth > max_depth {
            return Err(format!("descendant walk deeper than {max_depth} levels"));
        }
        out.push(value);
        match value {
            Value::Object(obj) => {
                for child in obj.values() {
                    Self::collect_descendants(child, depth + 1, max_depth, out)?;
                }
            }
            Value::Array(arr) => {
                for child in arr {
                    Self::collect_descendants(child, depth + 1, max_depth, out)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
