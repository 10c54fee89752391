//! Builder for composing providers with middleware layers.
//!
//! # Middleware Ordering Convention
//!
//! Middleware layers form an "onion" around the raw provider:
//!
//! ```text
//! Engine fan-out
//!     ↓
//! Outermost Middleware (first to see the call, last to see the result)
//!     ↓
//! Inner Middleware
//!     ↓
//! Raw Provider (makes the actual upstream call)
//! ```
//!
//! The `layers` vector stores middleware in **outermost-first** order (last added =
//! outermost) and is applied in reverse during `build()`.

use std::sync::Arc;
use std::time::Duration;

use cambio_core::{Middleware, RateProvider};

use crate::timeout::TimeoutMiddleware;

/// Generic middleware builder for composing a provider with layered wrappers.
///
/// See [module-level documentation](self) for details on middleware ordering.
pub struct ProviderBuilder {
    raw: Arc<dyn RateProvider>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ProviderBuilder {
    /// Create a new builder from a raw, unwrapped provider.
    #[must_use]
    pub fn new(raw: Arc<dyn RateProvider>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the timeout layer.
    ///
    /// The timeout is placed outermost so it bounds everything beneath it. If a
    /// timeout layer already exists, it is removed and replaced.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.layers.retain(|m| m.name() != "TimeoutMiddleware");
        self.layers.insert(0, Box::new(TimeoutMiddleware::new(timeout)));
        self
    }

    /// Remove the timeout layer if present.
    #[must_use]
    pub fn without_timeout(mut self) -> Self {
        self.layers.retain(|m| m.name() != "TimeoutMiddleware");
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Names and configs of the captured layers, outermost first.
    #[must_use]
    pub fn layers(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.layers
            .iter()
            .map(|m| (m.name(), m.config_json()))
            .collect()
    }

    /// Build the wrapped provider.
    ///
    /// With `layers = [A, B]` the result is `A(B(raw))`: calls flow `A -> B -> raw`.
    #[must_use]
    pub fn build(self) -> Arc<dyn RateProvider> {
        let mut acc: Arc<dyn RateProvider> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
