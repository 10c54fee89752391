//! Cambio-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod metrics;
mod rates;

pub use config::{CacheConfig, CambioConfig, HttpProviderConfig};
pub use connector::ProviderKey;
pub use error::CambioError;
pub use metrics::{MetricEvent, MetricsSnapshot, ProviderMetrics, ProviderMetricsEntry};
pub use rates::{AGGREGATED_DATASOURCE, RateTable, Rates};
