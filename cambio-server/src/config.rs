use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use cambio_core::{CacheConfig, CambioConfig, HttpProviderConfig};
use cambio_providers::{FrankfurterProvider, FreeCurrencyProvider};

/// Server settings, read from `CAMBIO_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub frankfurter: HttpProviderConfig,
    pub free_currency: HttpProviderConfig,
    pub engine: CambioConfig,
    pub cache: CacheConfig,
    pub log_format: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("CAMBIO_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid CAMBIO_LISTEN_ADDR")?;

        let timeout = match lookup("CAMBIO_PROVIDER_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .context("Invalid CAMBIO_PROVIDER_TIMEOUT_MS")?,
            ),
            None => HttpProviderConfig::DEFAULT_TIMEOUT,
        };
        let frankfurter = HttpProviderConfig::new(
            lookup("CAMBIO_FRANKFURTER_URL")
                .unwrap_or_else(|| FrankfurterProvider::DEFAULT_URL.to_string()),
        )
        .with_timeout(timeout);
        let free_currency = HttpProviderConfig::new(
            lookup("CAMBIO_FREE_CURRENCY_URL")
                .unwrap_or_else(|| FreeCurrencyProvider::DEFAULT_URL.to_string()),
        )
        .with_timeout(timeout);

        let mut engine = CambioConfig::default();
        if let Some(raw) = lookup("CAMBIO_CACHE_TTL_SECS") {
            let secs: u64 = raw.parse().context("Invalid CAMBIO_CACHE_TTL_SECS")?;
            engine.cache_ttl = Duration::from_secs(secs);
        }

        let mut cache = CacheConfig::default();
        if let Some(raw) = lookup("CAMBIO_CACHE_MAX_ENTRIES") {
            cache.max_entries = raw.parse().context("Invalid CAMBIO_CACHE_MAX_ENTRIES")?;
        }

        let log_format = lookup("CAMBIO_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            listen_addr,
            frankfurter,
            free_currency,
            engine,
            cache,
            log_format,
        })
    }
}
