use std::time::Duration;

use async_trait::async_trait;

use crate::{CambioError, RateTable};

/// Key-value store holding serialized rate tables with a per-write TTL.
///
/// The store owns every entry; callers get a fresh copy on each read. Errors are
/// reported so the caller can decide how to degrade, the aggregation engine treats a
/// failed read as a miss and swallows failed writes.
#[async_trait]
pub trait RateCache: Send + Sync {
    /// Read the entry under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<RateTable>, CambioError>;

    /// Write `value` under `key`, replacing any previous entry; it expires `ttl` after
    /// this write.
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &RateTable,
        ttl: Duration,
    ) -> Result<(), CambioError>;
}
