use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cambio_core::{CacheConfig, CambioError, RateCache, RateTable};
use moka::Expiry;
use moka::future::Cache;

/// Serialized table plus the TTL it was written with.
#[derive(Clone)]
struct Entry {
    payload: Arc<str>,
    ttl: Duration,
}

/// Expiry policy reading the TTL carried by each entry; rewrites restart the clock.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process `RateCache` backed by an async moka cache.
///
/// Values are stored as JSON; a payload that fails to decode is reported as
/// `CambioError::Cache`.
#[derive(Clone)]
pub struct MokaRateCache {
    inner: Cache<String, Entry>,
}

impl Default for MokaRateCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl MokaRateCache {
    /// Create a cache bounded by `cfg.max_entries`.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(cfg.max_entries.max(1))
            .expire_after(PerEntryTtl)
            .build();
        Self { inner }
    }

    /// Store a raw payload under `key`. Exposed for tests exercising decode failures.
    #[doc(hidden)]
    pub async fn insert_raw(&self, key: &str, payload: &str, ttl: Duration) {
        self.inner
            .insert(
                key.to_string(),
                Entry {
                    payload: Arc::from(payload),
                    ttl,
                },
            )
            .await;
    }
}

#[async_trait]
impl RateCache for MokaRateCache {
    async fn get(&self, key: &str) -> Result<Option<RateTable>, CambioError> {
        let Some(entry) = self.inner.get(key).await else {
            return Ok(None);
        };
        serde_json::from_str(&entry.payload)
            .map(Some)
            .map_err(|e| CambioError::cache(format!("decode {key}: {e}")))
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &RateTable,
        ttl: Duration,
    ) -> Result<(), CambioError> {
        let payload =
            serde_json::to_string(value).map_err(|e| CambioError::cache(format!("encode {key}: {e}")))?;
        self.insert_raw(key, &payload, ttl).await;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            key,
            ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            "rate table stored"
        );
        Ok(())
    }
}
