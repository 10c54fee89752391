use crate::{MetricEvent, MetricsSnapshot};

/// Passive accumulator of per-provider counters.
///
/// Implementations must make every increment atomic: concurrent requests record
/// against the same provider identity and no update may be lost. Records are created
/// lazily on the first event for an identity and never reset.
pub trait MetricsSink: Send + Sync {
    /// Record one occurrence of `event` for `provider`.
    fn record(&self, provider: &str, event: MetricEvent);

    /// Record one inbound query, independent of providers and cache outcome.
    fn increment_queries(&self);

    /// Current value of every counter.
    fn snapshot(&self) -> MetricsSnapshot;

    /// Shorthand for `record(provider, MetricEvent::Request)`.
    fn increment_request(&self, provider: &str) {
        self.record(provider, MetricEvent::Request);
    }

    /// Shorthand for `record(provider, MetricEvent::Response)`.
    fn increment_response(&self, provider: &str) {
        self.record(provider, MetricEvent::Response);
    }

    /// Shorthand for `record(provider, MetricEvent::Failure)`.
    fn increment_failure(&self, provider: &str) {
        self.record(provider, MetricEvent::Failure);
    }

    /// Shorthand for `record(provider, MetricEvent::CacheHit)`.
    fn increment_cache_hit(&self, provider: &str) {
        self.record(provider, MetricEvent::CacheHit);
    }
}
