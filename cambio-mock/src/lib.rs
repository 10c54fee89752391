//! Mock rate providers for tests and examples.
//!
//! - [`MockProvider`]: deterministic fixture data with magic bases that force
//!   failure (`FAIL`), a slow call (`TIMEOUT`) or a table without rates (`EMPTY`).
//! - [`DynamicMockProvider`]: behavior scripted at runtime through a controller.

use std::time::Duration;

use async_trait::async_trait;
use cambio_core::{CambioError, RateProvider, RateTable, Rates};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockProvider, MockBehavior};

/// Mock provider for CI-safe tests. Provides deterministic data from static fixtures.
pub struct MockProvider {
    name: &'static str,
    scale: f64,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Mock named `cambio-mock` serving unscaled fixtures.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "cambio-mock",
            scale: 1.0,
        }
    }

    /// Mock with a custom identity.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self { name, scale: 1.0 }
    }

    /// Multiply every fixture rate by `scale`, so several mocks disagree predictably.
    #[must_use]
    pub const fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn filter(&self, rates: Rates, symbols: Option<&str>) -> Rates {
        let scaled = rates.into_iter().map(|(k, v)| (k, v * self.scale));
        match symbols {
            None => scaled.collect(),
            Some(list) => {
                let wanted: Vec<String> = list
                    .split(',')
                    .map(|s| s.trim().to_ascii_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                scaled.filter(|(k, _)| wanted.contains(k)).collect()
            }
        }
    }

    async fn maybe_fail_or_timeout(&self, base: &str) -> Result<(), CambioError> {
        match base {
            "FAIL" => Err(CambioError::connector(self.name, "forced failure")),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RateProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        self.maybe_fail_or_timeout(base).await?;
        if base == "EMPTY" {
            return Ok(RateTable::without_rates(self.name, base));
        }
        let rates = fixtures::rates::by_base(base).ok_or_else(|| {
            CambioError::connector(self.name, format!("no fixture rates for {base}"))
        })?;
        Ok(RateTable::new(self.name, base, self.filter(rates, symbols)))
    }
}
