#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cambio::{CambioError, RateCache, RateTable};
use cambio_middleware::MokaRateCache;
use tokio::sync::Mutex;

/// Cache wrapper that counts traffic and can be switched into failure modes.
#[derive(Default)]
pub struct RecordingCache {
    inner: MokaRateCache,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    writes: Mutex<Vec<(String, Duration)>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub async fn writes(&self) -> Vec<(String, Duration)> {
        self.writes.lock().await.clone()
    }

    pub async fn peek(&self, key: &str) -> Option<RateTable> {
        self.inner.get(key).await.ok().flatten()
    }
}

#[async_trait]
impl RateCache for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<RateTable>, CambioError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CambioError::cache("store unreachable"));
        }
        self.inner.get(key).await
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &RateTable,
        ttl: Duration,
    ) -> Result<(), CambioError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.writes.lock().await.push((key.to_string(), ttl));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CambioError::cache("store unreachable"));
        }
        self.inner.set_with_ttl(key, value, ttl).await
    }
}
