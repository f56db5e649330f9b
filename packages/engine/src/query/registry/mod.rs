//! Predicate registry
//!
//! Named boolean operators, each a pure function of one resolved value and an
//! optional operand. The parser consults the registry for operand arity and the
//! evaluator for dispatch, so an operator that is not registered is rejected at
//! parse or construction time rather than silently ignored.

pub mod predicates;
pub mod regex_cache;

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use serde_json::Value;

use crate::error::{QueryResult, unknown_operator_error};
use crate::query::ast::Operand;

pub use regex_cache::{REGEX_CACHE, RegexCache};

/// Predicate function signature
pub type PredicateFn = Arc<dyn Fn(&Value, Option<&Operand>) -> bool + Send + Sync>;

/// Number of operands a predicate takes after the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Path only (`exists a.b`)
    Zero,
    /// Path and one operand (`equals a.b 1`)
    One,
}

impl Arity {
    #[must_use]
    pub fn takes_operand(self) -> bool {
        self == Arity::One
    }
}

/// A registered operator
#[derive(Clone)]
pub struct Predicate {
    name: String,
    arity: Arity,
    func: PredicateFn,
}

impl Predicate {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Apply the predicate to one resolved value
    #[inline]
    pub fn test(&self, value: &Value, operand: Option<&Operand>) -> bool {
        (self.func)(value, operand)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Mapping from operator name to predicate
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in operators:
    /// `equals`, `greater`, `less`, `contains`, `matches` (one operand) and `exists` (none)
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("equals", Arity::One, predicates::equals)
            .register("greater", Arity::One, predicates::greater)
            .register("less", Arity::One, predicates::less)
            .register("contains", Arity::One, predicates::contains)
            .register("matches", Arity::One, predicates::matches)
            .register("exists", Arity::Zero, predicates::exists);
        registry
    }

    /// Add or replace an operator
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F) -> &mut Self
    where
        F: Fn(&Value, Option<&Operand>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        self.predicates.insert(
            name.clone(),
            Predicate {
                name,
                arity,
                func: Arc::new(func),
            },
        );
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// Look up an operator, failing with `QueryError::UnknownOperator`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownOperator` (without offset) if `name` is not registered.
    pub fn lookup(&self, name: &str) -> QueryResult<&Predicate> {
        self.get(name)
            .ok_or_else(|| unknown_operator_error(name, None))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered operator names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("operators", &self.names())
            .finish()
    }
}

lazy_static::lazy_static! {
    /// Shared registry holding the built-in operators
    pub static ref DEFAULT_REGISTRY: Arc<PredicateRegistry> = Arc::new(PredicateRegistry::builtin());
}
