//! cambio-core
//!
//! Core traits and utilities shared across the cambio ecosystem.
//!
//! - `connector`: the `RateProvider` trait every upstream adapter implements.
//! - `metrics`: the `MetricsSink` contract the engine drives around each provider call.
//! - `cache`: the `RateCache` get/set-with-TTL contract consumed by the cache-aside layer.
//! - `merge`: the averaging merge that folds provider tables into one.
//! - `middleware`: the `Middleware` trait for wrapping providers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! The traits are runtime-agnostic, but every implementation shipped in this
//! workspace (stores, HTTP providers, timeout middleware) assumes a Tokio 1.x runtime.
//!
#![warn(missing_docs)]

/// Cache store contract.
pub mod cache;
/// Provider trait and per-call outcome.
pub mod connector;
/// Averaging merge over provider tables.
pub mod merge;
/// Metrics sink contract.
pub mod metrics;
/// Middleware trait implemented by provider wrappers.
pub mod middleware;
pub mod types;

pub use cache::RateCache;
pub use connector::{ProviderResult, RateProvider};
pub use merge::{aggregate, average_rates};
pub use metrics::MetricsSink;
pub use middleware::Middleware;
pub use types::*;
