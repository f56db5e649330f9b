//! Query evaluation configuration
//!
//! Resource limits applied by the path resolver while a tree is evaluated.

mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Limits for path resolution during evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Largest number of values a single path may resolve to, unbounded by default
    pub max_matches: usize,
    /// Deepest nesting level visited by descendant (`..`) segments
    pub max_depth: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_matches: ConfigDefaults::DEFAULT_MAX_MATCHES,
            max_depth: ConfigDefaults::DEFAULT_MAX_DEPTH,
        }
    }
}

impl QueryConfig {
    /// Create a configuration with explicit limits
    #[must_use]
    pub fn new(max_matches: usize, max_depth: usize) -> Self {
        Self {
            max_matches,
            max_depth,
        }
    }

    /// Set the match limit
    #[must_use]
    pub fn max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    /// Set the descendant depth limit
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse and validate a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the text is not a valid
    /// configuration object or a limit is out of range.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ConfigurationError::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Validator for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.max_matches,
            1,
            ConfigDefaults::MAX_MATCHES_LIMIT,
            "max_matches",
        )?;
        ConfigValidator::validate_range(
            self.max_depth,
            1,
            ConfigDefaults::MAX_DEPTH_LIMIT,
            "max_depth",
        )
    }
}
