//! Shared HTTP client, error types, and exit-code mapping for the CLI.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use dagda_config::{ConfigError, DagdaConfig};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use url::Url;
use uuid::Uuid;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type mapping failure classes to process exit codes.
#[derive(Debug)]
pub(crate) enum CliError {
    /// Server location could not be resolved from the environment.
    Config(ConfigError),
    /// A start option carried an out-of-range port.
    InvalidPort(PortFlag),
    /// Locally-detected usage error.
    Validation(String),
    /// Transport, decoding, or other operational failure.
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

/// Start flags subject to the local port-range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortFlag {
    Server,
    Mongodb,
}

impl PortFlag {
    pub(crate) const fn flag(self) -> &'static str {
        match self {
            Self::Server => "-p/--server_port",
            Self::Mongodb => "--mongodb_port",
        }
    }
}

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Exit code contract: 1 for configuration and server-port violations,
    /// 2 for mongodb-port and usage violations, 3 for operational failures.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidPort(PortFlag::Server) => 1,
            Self::InvalidPort(PortFlag::Mongodb) | Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Config(error) => error.to_string(),
            Self::InvalidPort(flag) => format!(
                "argument {}: the port must be between 1 and 65535",
                flag.flag()
            ),
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
}

impl AppContext {
    /// Resolve the server location and construct the HTTP client used for a
    /// single remote command.
    ///
    /// No request timeout is configured: a command blocks until the transport
    /// resolves or errors.
    pub(crate) fn from_env() -> CliResult<Self> {
        let config = DagdaConfig::from_env().map_err(CliError::Config)?;

        let trace_id = Uuid::new_v4().to_string();
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(&trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    /// Build a fully-qualified endpoint URL under the versioned API root.
    pub(crate) fn endpoint(&self, path: &str) -> CliResult<Url> {
        format!("{}{path}", self.base_url)
            .parse::<Url>()
            .map_err(|err| CliError::failure(anyhow!("invalid endpoint URL for '{path}': {err}")))
    }

    pub(crate) async fn get(&self, path: &str) -> CliResult<Vec<u8>> {
        let url = self.endpoint(path)?;
        self.send(Method::GET, url).await
    }

    pub(crate) async fn post(&self, path: &str) -> CliResult<Vec<u8>> {
        let url = self.endpoint(path)?;
        self.send(Method::POST, url).await
    }

    /// Issue the single outbound request for this invocation and return the
    /// raw response body, regardless of HTTP status.
    pub(crate) async fn send(&self, method: Method, url: Url) -> CliResult<Vec<u8>> {
        tracing::debug!(%method, %url, "dispatching request");
        let response = self
            .client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|err| CliError::failure(anyhow!("request to {url} failed: {err}")))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|err| CliError::failure(anyhow!("failed to read response body: {err}")))?;
        Ok(bytes.to_vec())
    }
}
