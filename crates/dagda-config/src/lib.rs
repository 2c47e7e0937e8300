#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Environment-backed configuration for the Dagda command-line client.
//!
//! The server location is resolved exactly once per invocation from two
//! required environment variables and handed to consumers as an immutable
//! snapshot; nothing downstream reads process environment again.

pub mod error;

pub use error::{ConfigError, ConfigResult};

use url::Url;

/// Environment variable naming the Dagda server host.
pub const ENV_DAGDA_HOST: &str = "DAGDA_HOST";
/// Environment variable naming the Dagda server port.
pub const ENV_DAGDA_PORT: &str = "DAGDA_PORT";

/// Resolved server location for the current invocation.
#[derive(Debug, Clone)]
pub struct DagdaConfig {
    base_url: Url,
}

impl DagdaConfig {
    /// Resolve the server location from process environment.
    ///
    /// Both `DAGDA_HOST` and `DAGDA_PORT` must be present; the first missing
    /// variable is the one reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when either variable is unset and
    /// [`ConfigError::InvalidBaseUrl`] when the pair does not form a URL.
    pub fn from_env() -> ConfigResult<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve the server location through the supplied variable lookup.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DagdaConfig::from_env`].
    pub fn resolve<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_DAGDA_HOST).ok_or(ConfigError::MissingVar {
            name: ENV_DAGDA_HOST,
        })?;
        let port = lookup(ENV_DAGDA_PORT).ok_or(ConfigError::MissingVar {
            name: ENV_DAGDA_PORT,
        })?;

        let value = format!("http://{host}:{port}/v1");
        let base_url = value
            .parse::<Url>()
            .map_err(|source| ConfigError::InvalidBaseUrl { value, source })?;
        Ok(Self { base_url })
    }

    /// Fully-qualified API root, `http://<host>:<port>/v1`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(
        host: Option<&'a str>,
        port: Option<&'a str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| match name {
            ENV_DAGDA_HOST => host.map(str::to_string),
            ENV_DAGDA_PORT => port.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn resolve_builds_versioned_base_url() {
        let config = DagdaConfig::resolve(env(Some("localhost"), Some("5000")))
            .expect("both variables present");
        assert_eq!(config.base_url().as_str(), "http://localhost:5000/v1");
    }

    #[test]
    fn resolve_reports_missing_host_first() {
        let err = DagdaConfig::resolve(env(None, Some("5000"))).expect_err("host absent");
        assert!(matches!(err, ConfigError::MissingVar { name } if name == ENV_DAGDA_HOST));
        assert_eq!(
            err.to_string(),
            "DAGDA_HOST environment variable is not set"
        );
    }

    #[test]
    fn resolve_reports_missing_port() {
        let err = DagdaConfig::resolve(env(Some("localhost"), None)).expect_err("port absent");
        assert!(matches!(err, ConfigError::MissingVar { name } if name == ENV_DAGDA_PORT));
    }

    #[test]
    fn resolve_rejects_unparseable_location() {
        let err = DagdaConfig::resolve(env(Some("localhost"), Some("not a port")))
            .expect_err("port is not numeric");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
