//! Observability counters exposed by metrics sinks.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Per-provider event tracked by the aggregation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricEvent {
    /// A request was issued to the provider (or served on its behalf from cache).
    Request,
    /// The provider returned a rate table.
    Response,
    /// The provider failed, timed out, or returned nothing usable.
    Failure,
    /// The query was answered from cache.
    CacheHit,
}

impl MetricEvent {
    /// Stable identifier for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Failure => "failure",
            Self::CacheHit => "cache-hit",
        }
    }
}

impl fmt::Display for MetricEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter values for one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetrics {
    /// Requests issued, including those answered from cache.
    pub total_requests: u64,
    /// Successful responses, including those answered from cache.
    pub total_responses: u64,
    /// Failed or empty provider calls.
    pub failed_requests: u64,
    /// Queries for which the provider's call was skipped due to a cache hit.
    pub cache_hits: u64,
}

/// Named counter record as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetricsEntry {
    /// Provider identity.
    pub name: String,
    /// Counter values at snapshot time.
    pub metrics: ProviderMetrics,
}

/// Point-in-time view of every counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Inbound queries served, regardless of cache outcome.
    pub total_queries: u64,
    /// One entry per provider observed so far.
    pub apis: Vec<ProviderMetricsEntry>,
}

impl MetricsSnapshot {
    /// Look up counters for a provider by name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&ProviderMetrics> {
        self.apis
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.metrics)
    }
}
