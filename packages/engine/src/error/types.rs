//! Query Error Types
//!
//! Core error types for DSL compilation, tree construction and evaluation.

use crate::config::ConfigurationError;

/// Broad classification of a [`QueryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token stream (bad quoting, illegal character)
    Lex,
    /// Grammar violation in the condition DSL
    Parse,
    /// Operator name absent from the predicate registry
    UnknownOperator,
    /// Tree violates the node invariants
    Structural,
    /// Path expression could not be resolved
    Path,
    /// Tree (de)serialization failure
    Serialization,
    /// Invalid configuration value
    Configuration,
}

/// Main query error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("lex error at offset {offset}: {message}")]
    Lex { message: String, offset: usize },

    #[error("parse error at offset {offset} near '{token}': {message}")]
    Parse {
        message: String,
        token: String,
        offset: usize,
    },

    #[error("unknown operator '{name}'{}", .offset.map(|o| format!(" at offset {o}")).unwrap_or_default())]
    UnknownOperator { name: String, offset: Option<usize> },

    #[error("structural error: {0}")]
    Structural(String),

    #[error("path error in '{path}': {message}")]
    Path { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    /// Classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Lex { .. } => ErrorKind::Lex,
            QueryError::Parse { .. } => ErrorKind::Parse,
            QueryError::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            QueryError::Structural(_) => ErrorKind::Structural,
            QueryError::Path { .. } => ErrorKind::Path,
            QueryError::Serialization(_) => ErrorKind::Serialization,
            QueryError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Character offset into the DSL source, when the error has one
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            QueryError::Lex { offset, .. } | QueryError::Parse { offset, .. } => Some(*offset),
            QueryError::UnknownOperator { offset, .. } => *offset,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        QueryError::Serialization(error.to_string())
    }
}
