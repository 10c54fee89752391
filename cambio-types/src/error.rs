use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cambio workspace.
///
/// Provider-level variants (`Connector`, `ProviderTimeout`, `Data`) never reach engine
/// callers: the fan-out absorbs them as absence. `NoData` is the only failure the
/// aggregation engine surfaces once its arguments are valid.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CambioError {
    /// No provider produced a rate table.
    #[error("No exchange rate data available from any provider")]
    NoData,

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual provider returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Provider name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider call exceeded its timeout.
    #[error("provider timed out: {connector} after {timeout_ms}ms")]
    ProviderTimeout {
        /// Provider name that timed out.
        connector: String,
        /// Configured bound in milliseconds.
        timeout_ms: u64,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The cache store failed to read, write or decode an entry.
    #[error("cache error: {0}")]
    Cache(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CambioError {
    /// Helper: build a `Connector` error with the provider name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Cache` error.
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// True for failures that originate in a single provider call.
    #[must_use]
    pub const fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Connector { .. } | Self::ProviderTimeout { .. } | Self::Data(_)
        )
    }
}
