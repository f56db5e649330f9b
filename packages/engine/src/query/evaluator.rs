//! Tree-walking evaluator
//!
//! Reduces a [`Node`] and a document to a single verdict. Conditions resolve
//! their path once and fold the predicate over the matched values with the
//! node's quantifier; `And` and `Or` stop at the first clause that decides the
//! result.

use serde_json::Value;

use crate::error::{QueryResult, structural_error, unknown_operator_error};
use crate::path::{DotPathResolver, PathResolver};
use crate::query::ast::{Condition, Node, Quantifier};
use crate::query::registry::{Predicate, PredicateRegistry};

/// Evaluates trees against documents using a registry and a path resolver
pub struct Evaluator<'a, R: PathResolver + ?Sized = DotPathResolver> {
    registry: &'a PredicateRegistry,
    resolver: &'a R,
}

impl<R: PathResolver + ?Sized> Clone for Evaluator<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: PathResolver + ?Sized> Copy for Evaluator<'_, R> {}

impl<'a, R: PathResolver + ?Sized> Evaluator<'a, R> {
    #[inline]
    #[must_use]
    pub fn new(registry: &'a PredicateRegistry, resolver: &'a R) -> Self {
        Self { registry, resolver }
    }

    #[must_use]
    pub fn registry(&self) -> &'a PredicateRegistry {
        self.registry
    }

    /// Evaluate `node` against `document`
    ///
    /// Path failures are data-level: the condition is false and a warning is
    /// logged. Only structural defects surface as errors.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownOperator` for an unregistered operator and
    /// `QueryError::Structural` for an empty `And`/`Or` or a missing operand.
    /// Clauses skipped by short-circuiting are not inspected.
    pub fn evaluate(&self, node: &Node, document: &Value) -> QueryResult<bool> {
        match node {
            Node::Condition(condition) => self.evaluate_condition(condition, document),
            Node::And { clauses } => {
                ensure_clauses("and", clauses)?;
                for clause in clauses {
                    if !self.evaluate(clause, document)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Or { clauses } => {
                ensure_clauses("or", clauses)?;
                for clause in clauses {
                    if self.evaluate(clause, document)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Node::Not { clause } => Ok(!self.evaluate(clause, document)?),
        }
    }

    /// Check `node` for structural defects without a document
    ///
    /// # Errors
    ///
    /// Same conditions as [`Evaluator::evaluate`], checked over the whole tree.
    pub fn validate(&self, node: &Node) -> QueryResult<()> {
        validate(node, self.registry)
    }

    fn evaluate_condition(&self, condition: &Condition, document: &Value) -> QueryResult<bool> {
        let predicate = checked_predicate(condition, self.registry)?;

        let values = match self.resolver.resolve(&condition.path, document) {
            Ok(values) => values,
            Err(error) => {
                tracing::warn!(
                    target: "dotquery::evaluator",
                    path = %condition.path,
                    op = %condition.op,
                    error = %error,
                    "path resolution failed, condition is false"
                );
                return Ok(false);
            }
        };

        let operand = condition.value.as_ref();
        let verdict = match condition.quantifier {
            Quantifier::Any => values.iter().any(|value| predicate.test(value, operand)),
            Quantifier::All => values.iter().all(|value| predicate.test(value, operand)),
        };

        tracing::debug!(
            target: "dotquery::evaluator",
            quantifier = condition.quantifier.as_str(),
            op = %condition.op,
            path = %condition.path,
            matched = values.len(),
            verdict,
            "evaluated condition"
        );

        Ok(verdict)
    }
}

/// Check a tree against `registry` for structural defects
///
/// # Errors
///
/// Returns `QueryError::UnknownOperator` for an unregistered operator and
/// `QueryError::Structural` for an empty `And`/`Or` or an operator that takes
/// an operand but has none.
pub fn validate(node: &Node, registry: &PredicateRegistry) -> QueryResult<()> {
    match node {
        Node::Condition(condition) => checked_predicate(condition, registry).map(|_| ()),
        Node::And { clauses } | Node::Or { clauses } => {
            ensure_clauses(node.type_name(), clauses)?;
            clauses.iter().try_for_each(|clause| validate(clause, registry))
        }
        Node::Not { clause } => validate(clause, registry),
    }
}

fn checked_predicate<'r>(
    condition: &Condition,
    registry: &'r PredicateRegistry,
) -> QueryResult<&'r Predicate> {
    let predicate = registry
        .get(&condition.op)
        .ok_or_else(|| unknown_operator_error(condition.op.as_str(), None))?;

    if predicate.arity().takes_operand() && condition.value.is_none() {
        return Err(structural_error(format!(
            "operator '{}' requires an operand",
            condition.op
        )));
    }

    Ok(predicate)
}

fn ensure_clauses(kind: &str, clauses: &[Node]) -> QueryResult<()> {
    if clauses.is_empty() {
        return Err(structural_error(format!("'{kind}' node has no clauses")));
    }
    Ok(())
}
