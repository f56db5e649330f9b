//! Query error handling module
//!
//! Error types, the `ErrorKind` discriminant and constructor helpers shared by the
//! tokenizer, parser, evaluator and path resolver.

pub mod constructors;
mod types;

pub use constructors::{
    lex_error, parse_error, path_error, structural_error, unknown_operator_error,
};
pub use types::{ErrorKind, QueryError, QueryResult};
