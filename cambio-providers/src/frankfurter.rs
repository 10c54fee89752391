use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use url::Url;

use cambio_core::{CambioError, HttpProviderConfig, ProviderKey, RateProvider, RateTable, Rates};

use crate::http;

/// Body of `GET /latest`. Only the fields the provider reads are modelled.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    rates: Option<Rates>,
}

/// Provider backed by the Frankfurter API (ECB reference rates).
pub struct FrankfurterProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl FrankfurterProvider {
    /// Static provider key.
    pub const KEY: ProviderKey = ProviderKey::new("Frankfurter API");

    /// Public endpoint used when no override is configured.
    pub const DEFAULT_URL: &'static str = "https://api.frankfurter.app";

    /// Construct an unwrapped provider from its config.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable base URL and `Connector` when the HTTP
    /// client cannot be built.
    pub fn new_raw(cfg: &HttpProviderConfig) -> Result<Self, CambioError> {
        Ok(Self {
            client: http::build_client(Self::KEY.as_str(), cfg)?,
            base_url: http::parse_base_url(Self::KEY.as_str(), &cfg.base_url)?,
        })
    }

    fn latest_url(&self, base: &str, symbols: Option<&str>) -> Url {
        let mut url = http::join_path(&self.base_url, &["latest"]);
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("from", base);
            if let Some(codes) = http::parse_symbols(symbols) {
                q.append_pair("to", &codes.join(","));
            }
        }
        url
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Frankfurter"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio::providers::frankfurter", skip(self))
    )]
    async fn fetch_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        let url = self.latest_url(base, symbols);
        let body: LatestResponse = http::get_json(&self.client, self.name(), url).await?;

        let mut table = match body.rates {
            Some(rates) => RateTable::new(self.name(), base, rates),
            None => RateTable::without_rates(self.name(), base),
        };
        if let Some(ts) = body
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            table = table.with_timestamp(Utc.from_utc_datetime(&ts));
        }
        Ok(table)
    }
}
