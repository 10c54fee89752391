//! Configuration types shared across the engine, stores and providers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Cambio` aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CambioConfig {
    /// Time-to-live applied to every cached aggregated table.
    pub cache_ttl: Duration,
}

impl Default for CambioConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(10 * 60),
        }
    }
}

/// Sizing for the in-process rate cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached entries before eviction.
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
        }
    }
}

/// Endpoint and timeout for an HTTP-backed provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpProviderConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
    /// Upper bound on a single upstream call.
    pub timeout: Duration,
}

impl HttpProviderConfig {
    /// Default per-call timeout for HTTP providers.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
