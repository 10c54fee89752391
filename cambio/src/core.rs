use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use cambio_core::{CacheConfig, CambioConfig, CambioError, MetricsSink, RateCache, RateProvider};
use cambio_middleware::{InMemoryMetrics, MokaRateCache};

/// Aggregation engine that fans queries out across registered providers.
pub struct Cambio {
    pub(crate) providers: Vec<Arc<dyn RateProvider>>,
    pub(crate) metrics: Arc<dyn MetricsSink>,
    pub(crate) cache: Arc<dyn RateCache>,
    pub(crate) cfg: CambioConfig,
}

/// Builder for constructing a `Cambio` engine with custom stores and configuration.
pub struct CambioBuilder {
    providers: Vec<Arc<dyn RateProvider>>,
    metrics: Option<Arc<dyn MetricsSink>>,
    cache: Option<Arc<dyn RateCache>>,
    cfg: CambioConfig,
}

impl Default for CambioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CambioBuilder {
    /// Create a new builder with no providers, in-memory stores and a 10 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: vec![],
            metrics: None,
            cache: None,
            cfg: CambioConfig::default(),
        }
    }

    /// Register a provider.
    ///
    /// Every registered provider is called on each cache miss, in registration order.
    /// The provider's `name()` is its metrics identity and must be unique.
    #[must_use]
    pub fn with_provider(mut self, p: Arc<dyn RateProvider>) -> Self {
        self.providers.push(p);
        self
    }

    /// Use a custom metrics sink. Defaults to [`InMemoryMetrics`].
    #[must_use]
    pub fn metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(sink);
        self
    }

    /// Use a custom cache store. Defaults to [`MokaRateCache`] with default sizing.
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn RateCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the TTL applied to every cache write.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cfg.cache_ttl = ttl;
        self
    }

    /// Replace the whole engine configuration.
    #[must_use]
    pub fn config(mut self, cfg: CambioConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Cambio` engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no providers have been registered via [`with_provider`],
    /// or if two providers share a name (their metrics would be merged).
    ///
    /// [`with_provider`]: Self::with_provider
    pub fn build(self) -> Result<Cambio, CambioError> {
        if self.providers.is_empty() {
            return Err(CambioError::invalid_arg(
                "no providers registered; add at least one via with_provider(...)",
            ));
        }
        let mut seen: HashSet<&'static str> = HashSet::new();
        for p in &self.providers {
            if !seen.insert(p.name()) {
                return Err(CambioError::invalid_arg(format!(
                    "duplicate provider name '{}'",
                    p.name()
                )));
            }
        }

        Ok(Cambio {
            providers: self.providers,
            metrics: self
                .metrics
                .unwrap_or_else(|| Arc::new(InMemoryMetrics::new())),
            cache: self
                .cache
                .unwrap_or_else(|| Arc::new(MokaRateCache::new(&CacheConfig::default()))),
            cfg: self.cfg,
        })
    }
}

impl Cambio {
    /// Start building a new `Cambio` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let cambio = cambio::Cambio::builder()
    ///     .with_provider(frankfurter)
    ///     .with_provider(free_currency)
    ///     .cache_ttl(Duration::from_secs(300))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CambioBuilder {
        CambioBuilder::new()
    }

    /// Registered providers, in registration order.
    #[must_use]
    pub fn providers(&self) -> &[Arc<dyn RateProvider>] {
        &self.providers
    }

    /// Engine configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &CambioConfig {
        &self.cfg
    }

    /// Current counters from the metrics sink.
    #[must_use]
    pub fn metrics_snapshot(&self) -> cambio_core::MetricsSnapshot {
        self.metrics.snapshot()
    }
}
