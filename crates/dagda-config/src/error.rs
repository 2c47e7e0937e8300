//! Error types for configuration resolution.

use thiserror::Error;

/// Primary error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("{name} environment variable is not set")]
    MissingVar {
        /// Name of the absent variable.
        name: &'static str,
    },
    /// The resolved host/port pair did not form a valid URL.
    #[error("invalid server base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// URL string assembled from the environment.
        value: String,
        /// Source parse error.
        source: url::ParseError,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
