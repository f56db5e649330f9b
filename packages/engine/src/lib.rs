//! # dotquery engine
//!
//! Compiles a small condition language into a serializable query tree and
//! evaluates that tree against JSON documents.
//!
//! ```text
//! all greater store.book[*].price 5 and not exists archived
//! ```
//!
//! - [`query::tokenizer`] and [`query::parser`] turn DSL text into a [`Node`]
//! - [`query::registry`] maps operator names to predicates
//! - [`query::evaluator`] applies `any`/`all` quantifiers and short-circuits `and`/`or`
//! - [`path`] resolves dotted path expressions to borrowed values
//!
//! ```
//! use dotquery_engine::prelude::*;
//! use serde_json::json;
//!
//! let tree = parse("equals user.role 'admin' and not exists user.banned")?;
//! let resolver = DotPathResolver::default();
//! let registry = PredicateRegistry::builtin();
//! let evaluator = Evaluator::new(&registry, &resolver);
//!
//! assert!(evaluator.evaluate(&tree, &json!({"user": {"role": "admin"}}))?);
//! # Ok::<(), dotquery_engine::error::QueryError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod path;
pub mod prelude;
pub mod query;

pub use config::QueryConfig;
pub use error::{ErrorKind, QueryError, QueryResult};
pub use path::{DotPathResolver, PathResolver};
pub use query::{
    Arity, Condition, Evaluator, Node, Operand, Predicate, PredicateRegistry, Quantifier, parse,
};
