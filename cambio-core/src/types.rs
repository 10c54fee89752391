//! Re-export of foundational types from `cambio-types`.
// Consolidated re-exports so downstream crates can depend on `cambio-core` only

pub use cambio_types::{AGGREGATED_DATASOURCE, RateTable, Rates};
pub use cambio_types::{CacheConfig, CambioConfig, HttpProviderConfig};
pub use cambio_types::{CambioError, ProviderKey};
pub use cambio_types::{MetricEvent, MetricsSnapshot, ProviderMetrics, ProviderMetricsEntry};
