//! Query facade
//!
//! [`Query`] owns a validated tree together with the registry and resolver used
//! to evaluate it. Construction is where unknown operators and malformed trees
//! are reported; [`Query::check`] then answers with a plain boolean.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use dotquery_engine::config::Validator;
use dotquery_engine::query::{self, DEFAULT_REGISTRY, Evaluator, Node, PredicateRegistry};
use dotquery_engine::{DotPathResolver, QueryConfig, QueryResult};

/// Input accepted by [`Query::new`]
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySource {
    /// Condition DSL text
    Text(String),
    /// Tree from the builder or from deserialization
    Tree(Node),
}

impl From<&str> for QuerySource {
    fn from(text: &str) -> Self {
        QuerySource::Text(text.to_string())
    }
}

impl From<String> for QuerySource {
    fn from(text: String) -> Self {
        QuerySource::Text(text)
    }
}

impl From<Node> for QuerySource {
    fn from(tree: Node) -> Self {
        QuerySource::Tree(tree)
    }
}

impl From<Query> for QuerySource {
    fn from(query: Query) -> Self {
        QuerySource::Tree(query.tree)
    }
}

/// A compiled, validated query
#[derive(Clone)]
pub struct Query {
    tree: Node,
    registry: Arc<PredicateRegistry>,
    resolver: Arc<DotPathResolver>,
}

impl Query {
    /// Compile DSL text or adopt a tree, resolving operators in the built-in registry
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Lex` or `QueryError::Parse` for bad text,
    /// `QueryError::UnknownOperator` for unregistered operators and
    /// `QueryError::Structural` for malformed trees.
    pub fn new(source: impl Into<QuerySource>) -> QueryResult<Self> {
        Self::with_registry(source, Arc::clone(&*DEFAULT_REGISTRY))
    }

    /// Compile against a caller-supplied registry
    ///
    /// # Errors
    ///
    /// Same as [`Query::new`].
    pub fn with_registry(
        source: impl Into<QuerySource>,
        registry: Arc<PredicateRegistry>,
    ) -> QueryResult<Self> {
        let tree = compile(source.into(), &registry)?;
        Ok(Self {
            tree,
            registry,
            resolver: Arc::new(DotPathResolver::default()),
        })
    }

    /// Replace the resolver limits
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Configuration` if a limit is zero or out of range.
    pub fn with_config(mut self, config: QueryConfig) -> QueryResult<Self> {
        config.validate()?;
        self.resolver = Arc::new(DotPathResolver::new(config));
        Ok(self)
    }

    /// Deserialize a tree from JSON and validate it
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` for malformed JSON and the
    /// [`Query::new`] errors for invalid trees.
    pub fn from_json(text: &str) -> QueryResult<Self> {
        Self::new(Node::from_json(text)?)
    }

    #[must_use]
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    #[must_use]
    pub fn into_tree(self) -> Node {
        self.tree
    }

    #[must_use]
    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        self.resolver.config()
    }

    /// Serialize the tree to JSON text
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` if serde fails.
    pub fn to_json(&self) -> QueryResult<String> {
        self.tree.to_json()
    }

    /// Serialize the tree to a JSON value
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Serialization` if serde fails.
    pub fn to_value(&self) -> QueryResult<Value> {
        self.tree.to_value()
    }

    /// Evaluate against `document`
    ///
    /// Never fails: an evaluation error is logged and answered with `false`.
    #[must_use]
    pub fn check(&self, document: &Value) -> bool {
        self.try_check(document).unwrap_or_else(|error| {
            tracing::error!(
                target: "dotquery::query",
                error = %error,
                query = %self.tree,
                "query evaluation failed"
            );
            false
        })
    }

    /// Evaluate against `document`, surfacing structural errors
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownOperator` or `QueryError::Structural`; path
    /// failures are absorbed into a `false` condition.
    pub fn try_check(&self, document: &Value) -> QueryResult<bool> {
        Evaluator::new(&self.registry, self.resolver.as_ref()).evaluate(&self.tree, document)
    }

    /// Conjunction with another query, tree or DSL text
    ///
    /// # Errors
    ///
    /// Returns the [`Query::new`] errors for `other`, checked against this
    /// query's registry.
    pub fn and(self, other: impl Into<QuerySource>) -> QueryResult<Self> {
        let other = compile(other.into(), &self.registry)?;
        Ok(self.map_tree(|tree| tree.and(other)))
    }

    /// Disjunction with another query, tree or DSL text
    ///
    /// # Errors
    ///
    /// Same as [`Query::and`].
    pub fn or(self, other: impl Into<QuerySource>) -> QueryResult<Self> {
        let other = compile(other.into(), &self.registry)?;
        Ok(self.map_tree(|tree| tree.or(other)))
    }

    /// Logical negation
    #[must_use]
    pub fn negate(self) -> Self {
        self.map_tree(Node::negate)
    }

    fn map_tree(self, f: impl FnOnce(Node) -> Node) -> Self {
        Self {
            tree: f(self.tree),
            registry: self.registry,
            resolver: self.resolver,
        }
    }
}

fn compile(source: QuerySource, registry: &PredicateRegistry) -> QueryResult<Node> {
    match source {
        QuerySource::Text(text) => {
            let tree = query::parse_with_registry(&text, registry)?;
            tracing::debug!(target: "dotquery::query", source = %text, "compiled query text");
            Ok(tree)
        }
        QuerySource::Tree(tree) => {
            query::validate(&tree, registry)?;
            Ok(tree)
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("tree", &self.tree)
            .field("config", self.resolver.config())
            .finish_non_exhaustive()
    }
}

/// Renders the tree as DSL text
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl TryFrom<&str> for Query {
    type Error = dotquery_engine::QueryError;

    fn try_from(text: &str) -> QueryResult<Self> {
        Query::new(text)
    }
}

impl TryFrom<Node> for Query {
    type Error = dotquery_engine::QueryError;

    fn try_from(tree: Node) -> QueryResult<Self> {
        Query::new(tree)
    }
}
