use chrono::Utc;

use cambio_core::{CambioError, ProviderResult, RateTable, aggregate};

use crate::Cambio;
use crate::router::cache::cache_key;
use crate::router::{normalize_symbols, validate_base};

impl Cambio {
    /// Aggregated rates for `base`, served cache-aside.
    ///
    /// Behavior:
    /// - Increments the global query counter once per call.
    /// - On a cache hit, returns the stored table unchanged and records a request,
    ///   a response and a cache hit for every registered provider without calling any.
    /// - On a miss, fans out via [`get_fresh_rates`](Self::get_fresh_rates) and stores the
    ///   result with the configured TTL. A failed write does not fail the call.
    /// - `symbols` is passed to providers as given; an empty filter means no filter and
    ///   shares its cache entry with `None`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank `base` (before any counter moves) and `NoData`
    /// when no provider produced a table. Nothing is cached in either case.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::router::rates::get_rates",
            skip(self),
            fields(providers = self.providers.len()),
        )
    )]
    pub async fn get_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        let base = validate_base(base)?;
        let symbols = normalize_symbols(symbols);
        self.metrics.increment_queries();

        let key = cache_key(base, symbols);
        if let Some(cached) = self.cache_lookup(&key).await {
            for p in &self.providers {
                let name = p.name();
                self.metrics.increment_request(name);
                self.metrics.increment_response(name);
                self.metrics.increment_cache_hit(name);
            }
            return Ok(cached);
        }

        let fresh = self.fan_out(base, symbols).await?;
        self.cache_store(&key, &fresh).await;
        Ok(fresh)
    }

    /// Query every provider concurrently and average the results, bypassing the cache.
    ///
    /// Each provider records a request before its call and then exactly one of a
    /// response (any `Ok` table, even one without rates) or a failure. Failed providers
    /// are excluded from the merge. The result is tagged as aggregated and stamped with
    /// the current time.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank `base` and `NoData` when every provider failed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio::router::rates::get_fresh_rates", skip(self))
    )]
    pub async fn get_fresh_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        let base = validate_base(base)?;
        self.fan_out(base, normalize_symbols(symbols)).await
    }

    /// Per-provider outcomes of one fan-out, in registration order.
    ///
    /// Drives the same request/response/failure counters as a cache miss but performs
    /// no merge. Useful for diagnostics.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank `base`.
    pub async fn provider_results(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<Vec<(&'static str, ProviderResult)>, CambioError> {
        let base = validate_base(base)?;
        Ok(self.dispatch(base, normalize_symbols(symbols)).await)
    }

    async fn fan_out(&self, base: &str, symbols: Option<&str>) -> Result<RateTable, CambioError> {
        let tables: Vec<RateTable> = self
            .dispatch(base, symbols)
            .await
            .into_iter()
            .filter_map(|(_, res)| res.into_table())
            .collect();

        if tables.is_empty() {
            return Err(CambioError::NoData);
        }
        Ok(aggregate(base, &tables).with_timestamp(Utc::now()))
    }

    async fn dispatch(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Vec<(&'static str, ProviderResult)> {
        let tasks = self.providers.iter().map(|p| async move {
            let name = p.name();
            self.metrics.increment_request(name);
            let outcome = ProviderResult::from(p.fetch_rates(base, symbols).await);
            match &outcome {
                ProviderResult::Available(_) => self.metrics.increment_response(name),
                ProviderResult::Unavailable(_err) => {
                    self.metrics.increment_failure(name);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(provider = name, error = %_err, "provider unavailable");
                }
            }
            (name, outcome)
        });

        futures::future::join_all(tasks).await
    }
}
