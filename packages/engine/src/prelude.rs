//! Commonly used types
//!
//! Everything needed to parse, build and evaluate a query tree.

pub use crate::config::QueryConfig;
pub use crate::error::{ErrorKind, QueryError, QueryResult};
pub use crate::path::{DotPathResolver, PathResolver};
pub use crate::query::{
    Arity, Condition, DEFAULT_REGISTRY, Evaluator, Node, Operand, PredicateRegistry, Quantifier,
    parse, parse_with_registry,
};
