//! Path resolver interface and the default dotted-path implementation

use std::fmt;
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;
use serde_json::Value;

use super::engine::SelectorEngine;
use super::parser::PathParser;
use super::selectors::PathExpression;
use crate::config::QueryConfig;
use crate::error::QueryResult;

/// Compiled paths kept per resolver
const PATH_CACHE_CAPACITY: usize = 256;

/// Turns a path expression and a document into the ordered sequence of matched values
///
/// Implementations must be read-only with respect to the document and tolerate
/// paths matching zero, one or many locations. A resolver shared between threads
/// must be reentrant for concurrent lookups.
pub trait PathResolver {
    /// Resolve `path` against `document`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Path` if the path text is malformed or the lookup
    /// exceeds a resource limit.
    fn resolve<'v>(&self, path: &str, document: &'v Value) -> QueryResult<Vec<&'v Value>>;
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    fn resolve<'v>(&self, path: &str, document: &'v Value) -> QueryResult<Vec<&'v Value>> {
        (**self).resolve(path, document)
    }
}

/// Default resolver for the dotted path syntax
pub struct DotPathResolver {
    config: QueryConfig,
    cache: RwLock<HashMap<String, Arc<PathExpression>>>,
}

impl DotPathResolver {
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Get compiled path from cache or compile and cache if not present
    fn compiled(&self, path: &str) -> QueryResult<Arc<PathExpression>> {
        if let Ok(cache) = self.cache.read()
            && let Some(expression) = cache.get(path)
        {
            return Ok(Arc::clone(expression));
        }

        let expression = Arc::new(PathParser::compile(path)?);

        if let Ok(mut cache) = self.cache.write()
            && cache.len() < PATH_CACHE_CAPACITY
        {
            cache.insert(path.to_string(), Arc::clone(&expression));
        }

        Ok(expression)
    }
}

impl Default for DotPathResolver {
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}

impl Clone for DotPathResolver {
    fn clone(&self) -> Self {
        Self::new(self.config)
    }
}

impl fmt::Debug for DotPathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.cache.read().map(|c| c.len()).unwrap_or_default();
        f.debug_struct("DotPathResolver")
            .field("config", &self.config)
            .field("cached_paths", &cached)
            .finish()
    }
}

impl PathResolver for DotPathResolver {
    fn resolve<'v>(&self, path: &str, document: &'v Value) -> QueryResult<Vec<&'v Value>> {
        let expression = self.compiled(path)?;
        SelectorEngine::apply(document, &expression, &self.config)
    }
}
