//! Timeout wrapper for rate providers.
//!
//! The engine waits for every provider to settle before merging, so an upstream that
//! never answers would stall the whole query. This wrapper converts an elapsed call
//! into `CambioError::ProviderTimeout`, which the engine counts as a failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cambio_core::{CambioError, Middleware, RateProvider, RateTable};

/// Wrapper that bounds each `fetch_rates` call.
pub struct TimeoutProvider {
    inner: Arc<dyn RateProvider>,
    timeout: Duration,
}

impl TimeoutProvider {
    /// Wrap `inner` so each call is abandoned after `timeout`.
    pub fn new(inner: Arc<dyn RateProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Access the inner provider.
    pub fn inner(&self) -> &Arc<dyn RateProvider> {
        &self.inner
    }

    /// Configured bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl RateProvider for TimeoutProvider {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    async fn fetch_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        let call = self.inner.fetch_rates(base, symbols);
        if let Ok(res) = tokio::time::timeout(self.timeout, call).await {
            res
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                provider = self.inner.name(),
                timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                "provider call timed out"
            );
            Err(CambioError::provider_timeout(self.inner.name(), self.timeout))
        }
    }
}

/// Declarative wrapper that applies a timeout when building a provider stack.
pub struct TimeoutMiddleware {
    timeout: Duration,
}

impl TimeoutMiddleware {
    /// Create a timeout layer.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Middleware for TimeoutMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn RateProvider>) -> Arc<dyn RateProvider> {
        Arc::new(TimeoutProvider::new(inner, self.timeout))
    }

    fn name(&self) -> &'static str {
        "TimeoutMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "timeout_ms": u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }
}
