use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cambio_core::{MetricEvent, MetricsSink, MetricsSnapshot, ProviderMetrics, ProviderMetricsEntry};
use dashmap::DashMap;

#[derive(Default)]
struct ProviderCounters {
    requests: AtomicU64,
    responses: AtomicU64,
    failures: AtomicU64,
    cache_hits: AtomicU64,
}

impl ProviderCounters {
    const fn counter(&self, event: MetricEvent) -> &AtomicU64 {
        match event {
            MetricEvent::Request => &self.requests,
            MetricEvent::Response => &self.responses,
            MetricEvent::Failure => &self.failures,
            MetricEvent::CacheHit => &self.cache_hits,
        }
    }

    fn load(&self) -> ProviderMetrics {
        ProviderMetrics {
            total_requests: self.requests.load(Ordering::Relaxed),
            total_responses: self.responses.load(Ordering::Relaxed),
            failed_requests: self.failures.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}

/// Process-lifetime counters keyed by provider identity.
///
/// The map shard lock is held only to find or create a provider's record; the
/// increment itself is a single atomic add, so concurrent events never lose updates.
#[derive(Default)]
pub struct InMemoryMetrics {
    providers: DashMap<String, Arc<ProviderCounters>>,
    total_queries: AtomicU64,
}

impl InMemoryMetrics {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn counters(&self, provider: &str) -> Arc<ProviderCounters> {
        if let Some(c) = self.providers.get(provider) {
            return Arc::clone(c.value());
        }
        Arc::clone(
            self.providers
                .entry(provider.to_string())
                .or_default()
                .value(),
        )
    }
}

impl MetricsSink for InMemoryMetrics {
    fn record(&self, provider: &str, event: MetricEvent) {
        self.counters(provider)
            .counter(event)
            .fetch_add(1, Ordering::Relaxed);
    }

    fn increment_queries(&self) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> MetricsSnapshot {
        let mut apis: Vec<ProviderMetricsEntry> = self
            .providers
            .iter()
            .map(|e| ProviderMetricsEntry {
                name: e.key().clone(),
                metrics: e.value().load(),
            })
            .collect();
        apis.sort_by(|a, b| a.name.cmp(&b.name));
        MetricsSnapshot {
            total_queries: self.total_queries.load(Ordering::Relaxed),
            apis,
        }
    }
}
