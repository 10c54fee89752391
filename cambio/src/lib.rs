//! Cambio aggregates currency exchange rates from several independent providers.
//!
//! Overview
//! - Fans out every query to all registered providers concurrently and waits for each
//!   to settle. A provider that errors or times out is counted as a failure and left
//!   out; it never fails or delays the others.
//! - Merges the successful tables by averaging each target currency over the providers
//!   that reported it. Currencies reported by a single provider keep that value.
//! - Serves results cache-aside under `exchangeRates::{base}::{symbols}` with one fixed
//!   TTL. Cache failures degrade to a miss (read) or are logged and swallowed (write).
//! - Drives per-provider request/response/failure/cache-hit counters and a global
//!   query counter through a `MetricsSink`.
//!
//! The only terminal failure once arguments are valid is `CambioError::NoData`, raised
//! when no provider produced a table.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use cambio::Cambio;
//! use cambio_mock::MockProvider;
//!
//! let cambio = Cambio::builder()
//!     .with_provider(Arc::new(MockProvider::named("a")))
//!     .with_provider(Arc::new(MockProvider::named("b").scaled(1.02)))
//!     .build()?;
//!
//! let table = cambio.get_rates("USD", Some("EUR,GBP")).await?;
//! let counters = cambio.metrics_snapshot();
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Cambio, CambioBuilder};
pub use crate::router::cache::cache_key;

pub use cambio_core::{
    AGGREGATED_DATASOURCE, CambioConfig, CambioError, MetricsSink, MetricsSnapshot,
    ProviderMetrics, RateCache, RateProvider, RateTable, Rates,
};
