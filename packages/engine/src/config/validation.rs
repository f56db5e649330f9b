//! Core Configuration Utilities
//!
//! Validation trait, range checks and defaults for query configuration.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a parameter is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    /// Unbounded; a cap is opt-in since a truncated result set changes verdicts
    pub const DEFAULT_MAX_MATCHES: usize = usize::MAX;
    /// serde_json's own recursion limit, so any parsed document is walked in full
    pub const DEFAULT_MAX_DEPTH: usize = 128;
    pub const MAX_MATCHES_LIMIT: usize = usize::MAX;
    pub const MAX_DEPTH_LIMIT: usize = 4_096;
}
