//! Error constructor functions
//!
//! Factory functions for building [`QueryError`] values with position context.

use super::types::QueryError;

/// Creates a tokenizer error at a character offset
///
/// # Examples
/// ```
/// use dotquery_engine::error::{lex_error, ErrorKind};
///
/// let error = lex_error("unterminated string literal", 7);
/// assert_eq!(error.kind(), ErrorKind::Lex);
/// ```
pub fn lex_error(message: impl Into<String>, offset: usize) -> QueryError {
    QueryError::Lex {
        message: message.into(),
        offset,
    }
}

/// Creates a grammar error naming the offending token
pub fn parse_error(
    message: impl Into<String>,
    token: impl Into<String>,
    offset: usize,
) -> QueryError {
    QueryError::Parse {
        message: message.into(),
        token: token.into(),
        offset,
    }
}

/// Creates an unknown operator error; `offset` is `None` for trees built without source text
pub fn unknown_operator_error(name: impl Into<String>, offset: Option<usize>) -> QueryError {
    QueryError::UnknownOperator {
        name: name.into(),
        offset,
    }
}

/// Creates an error for a tree that violates node invariants
pub fn structural_error(message: impl Into<String>) -> QueryError {
    QueryError::Structural(message.into())
}

/// Creates a path resolution error
pub fn path_error(path: impl Into<String>, message: impl Into<String>) -> QueryError {
    QueryError::Path {
        path: path.into(),
        message: message.into(),
    }
}
