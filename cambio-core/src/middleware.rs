//! Middleware trait for wrapping `RateProvider` implementations.

use std::sync::Arc;

use crate::connector::RateProvider;

/// Trait implemented by provider middleware layers.
///
/// A middleware consumes an inner `RateProvider` and returns a wrapped provider that
/// augments or restricts behavior (e.g., timeouts). Wrappers must report the inner
/// provider's `name()` so metrics identity survives wrapping.
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner provider and return the wrapped provider.
    fn apply(self: Box<Self>, inner: Arc<dyn RateProvider>) -> Arc<dyn RateProvider>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
