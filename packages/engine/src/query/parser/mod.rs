//! Recursive descent parser for the condition DSL
//!
//! ```text
//! Expr      := OrExpr
//! OrExpr    := AndExpr ('or' AndExpr)*
//! AndExpr   := NotExpr ('and' NotExpr)*
//! NotExpr   := 'not' NotExpr | Atom
//! Atom      := '(' Expr ')' | Condition
//! Condition := ['any' | 'all'] Operator Path [Operand]
//! ```
//!
//! `not` binds tighter than `and`, which binds tighter than `or`. Chains of the
//! same combinator fold into one node through [`Node::and`] and [`Node::or`].

pub mod conditions;
pub mod core;
pub mod expressions;

pub use self::core::Parser;

use crate::error::QueryResult;
use crate::query::ast::Node;
use crate::query::registry::{DEFAULT_REGISTRY, PredicateRegistry};

/// Parse DSL text against the built-in operators
///
/// # Errors
///
/// Returns `QueryError::Lex`, `QueryError::Parse` or `QueryError::UnknownOperator`.
pub fn parse(input: &str) -> QueryResult<Node> {
    let registry: &PredicateRegistry = &DEFAULT_REGISTRY;
    parse_with_registry(input, registry)
}

/// Parse DSL text against a caller-supplied registry
///
/// # Errors
///
/// Returns `QueryError::Lex`, `QueryError::Parse` or `QueryError::UnknownOperator`.
pub fn parse_with_registry(input: &str, registry: &PredicateRegistry) -> QueryResult<Node> {
    Parser::with_registry(input, registry)?.parse()
}
