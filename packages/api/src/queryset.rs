//! Serializable query plus the data sources it applies to
//!
//! The JSON form is what gets handed between pipeline stages:
//!
//! ```json
//! {"query_ast": {"type": "condition", "quantifier": "any", "op": "equals", "path": "role", "value": "admin"},
//!  "sources": ["users/*.json"]}
//! ```
//!
//! Each stage can narrow the query with [`QuerySet::and`], widen it with
//! [`QuerySet::or`] or invert it with [`QuerySet::negate`] before passing it on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dotquery_engine::QueryResult;
use dotquery_engine::query::Node;

use crate::query::{Query, QuerySource};

#[derive(Serialize, Deserialize)]
struct QuerySetRecord {
    query_ast: Node,
    sources: Vec<String>,
}

/// A query with the list of sources it should run against
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySet {
    query: Query,
    sources: Vec<String>,
}

impl QuerySet {
    /// # Errors
    ///
    /// Returns the [`Query::new`] errors for `query`.
    pub fn new<S: Into<String>>(
        query: impl Into<QuerySource>,
        sources: impl IntoIterator<Item = S>,
    ) -> QueryResult<Self> {
        Ok(Self {
            query: Query::new(query)?,
            sources: sources.into_iter().map(Into::into).collect(),
        })
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Pretty-printed `{"query_ast": ..., "sources": [...]}`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` if serde fails.
    pub fn to_json(&self) -> QueryResult<String> {
        let record = QuerySetRecord {
            query_ast: self.query.tree().clone(),
            sources: self.sources.clone(),
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// # Errors
    ///
    /// Returns `QueryError::Serialization` for malformed JSON or a missing
    /// field, and the [`Query::new`] errors for an invalid tree.
    pub fn from_json(text: &str) -> QueryResult<Self> {
        let record: QuerySetRecord = serde_json::from_str(text)?;
        Self::new(record.query_ast, record.sources)
    }

    /// Narrow the query with another condition
    ///
    /// # Errors
    ///
    /// Returns the [`Query::new`] errors for `other`.
    pub fn and(self, other: impl Into<QuerySource>) -> QueryResult<Self> {
        Ok(Self {
            query: self.query.and(other)?,
            sources: self.sources,
        })
    }

    /// Widen the query with an alternative condition
    ///
    /// # Errors
    ///
    /// Returns the [`Query::new`] errors for `other`.
    pub fn or(self, other: impl Into<QuerySource>) -> QueryResult<Self> {
        Ok(Self {
            query: self.query.or(other)?,
            sources: self.sources,
        })
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            query: self.query.negate(),
            sources: self.sources,
        }
    }

    /// Documents for which the query holds, in input order
    pub fn filter<'d, I>(&self, documents: I) -> impl Iterator<Item = &'d Value>
    where
        I: IntoIterator<Item = &'d Value>,
    {
        documents
            .into_iter()
            .filter(|document| self.query.check(document))
    }
}
