//! Regex compilation cache shared by the pattern predicates

use std::sync::RwLock;

use hashbrown::HashMap;
use regex::Regex;

/// Patterns kept in the shared cache
const REGEX_CACHE_CAPACITY: usize = 64;

/// Bounded regex compilation cache
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
    capacity: usize,
}

impl RegexCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// # Errors
    ///
    /// Returns the `regex::Error` for an invalid pattern; failures are not cached.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        // Try read lock first for fast path
        if let Ok(cache) = self.cache.read()
            && let Some(regex) = cache.get(pattern)
        {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;

        if let Ok(mut cache) = self.cache.write()
            && cache.len() < self.capacity
        {
            cache.insert(pattern.to_string(), regex.clone());
        }

        Ok(regex)
    }

    /// Number of cached patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new(REGEX_CACHE_CAPACITY)
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_up_to_capacity() {
        let cache = RegexCache::new(2);
        assert!(cache.get_or_compile("a+").is_ok());
        assert!(cache.get_or_compile("a+").is_ok());
        assert!(cache.get_or_compile("b+").is_ok());
        assert!(cache.get_or_compile("c+").is_ok());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalid_patterns_are_not_cached() {
        let cache = RegexCache::new(4);
        assert!(cache.get_or_compile("(unclosed").is_err());
        assert!(cache.is_empty());
    }
}
