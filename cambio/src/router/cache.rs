use cambio_core::RateTable;

use crate::Cambio;

/// Cache key for a query: `exchangeRates::{base}::{symbols}`.
///
/// Absent symbols render as the empty string, so `None` and `Some("")` share a key.
#[must_use]
pub fn cache_key(base: &str, symbols: Option<&str>) -> String {
    format!("exchangeRates::{base}::{}", symbols.unwrap_or(""))
}

impl Cambio {
    /// Read through the cache. A failed read is treated as a miss.
    pub(crate) async fn cache_lookup(&self, key: &str) -> Option<RateTable> {
        match self.cache.get(key).await {
            Ok(Some(table)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key, "cache hit");
                Some(table)
            }
            Ok(None) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key, "cache miss");
                None
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_err, "cache read failed; treating as miss");
                None
            }
        }
    }

    /// Write the aggregated table with the configured TTL. Failures are logged only.
    pub(crate) async fn cache_store(&self, key: &str, table: &RateTable) {
        match self.cache.set_with_ttl(key, table, self.cfg.cache_ttl).await {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    key,
                    ttl_secs = self.cfg.cache_ttl.as_secs(),
                    "cached aggregated rates"
                );
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_err, "cache write failed");
            }
        }
    }
}
