//! # dotquery
//!
//! Boolean questions over nested JSON documents, asked either in a small text
//! language or through builder functions. Both front ends produce the same
//! serializable tree, and [`Query::check`] turns tree plus document into a
//! single verdict.
//!
//! ```
//! use dotquery::Query;
//! use serde_json::json;
//!
//! let query = Query::new(
//!     "(equals role 'admin' and greater login_count 10) or equals is_superuser true",
//! )?;
//! assert!(query.check(&json!({"role": "admin", "login_count": 11})));
//!
//! let prices = json!({"store": {"book": [{"price": 5}, {"price": 9}]}});
//! assert!(!Query::new("all greater store.book[*].price 5")?.check(&prices));
//! assert!(Query::new("any greater store.book[*].price 5")?.check(&prices));
//! # Ok::<(), dotquery::QueryError>(())
//! ```
//!
//! Quantifiers range over every value a path resolves to: `any` needs one match
//! and is false when nothing resolves, `all` needs every match and is vacuously
//! true when nothing resolves.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod query;
pub mod queryset;

pub use query::{Query, QuerySource};
pub use queryset::QuerySet;

// Re-export the engine types callers touch directly
pub use dotquery_engine::config::ConfigurationError;
pub use dotquery_engine::query::{
    Arity, Condition, Node, Operand, PredicateRegistry, Quantifier, parse,
};
pub use dotquery_engine::{
    DotPathResolver, ErrorKind, PathResolver, QueryConfig, QueryError, QueryResult,
};
