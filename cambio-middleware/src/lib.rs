//! cambio-middleware
//!
//! Concrete stores and provider wrappers used by the aggregation engine.
//!
//! - [`MokaRateCache`]: in-process `RateCache` with per-write TTL.
//! - [`InMemoryMetrics`]: lock-free per-provider counters implementing `MetricsSink`.
//! - [`TimeoutMiddleware`]: bounds each provider call so a stalled upstream surfaces as
//!   a failure instead of holding the fan-out.
//! - [`ProviderBuilder`]: composes a raw provider with middleware layers.

mod builder;
mod cache;
mod metrics;
mod timeout;

pub use crate::builder::ProviderBuilder;
pub use crate::cache::MokaRateCache;
pub use crate::metrics::InMemoryMetrics;
pub use crate::timeout::{TimeoutMiddleware, TimeoutProvider};
