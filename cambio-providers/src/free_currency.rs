use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use cambio_core::{CambioError, HttpProviderConfig, ProviderKey, RateProvider, RateTable, Rates};

use crate::http;

/// Provider backed by the Free Currency Rates API (fawazahmed0 currency-api).
///
/// The upstream serves `{ "date": "...", "<base>": { "<code>": rate, ... } }` with
/// lowercase codes and cannot filter, so symbol filtering happens here.
pub struct FreeCurrencyProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl FreeCurrencyProvider {
    /// Static provider key.
    pub const KEY: ProviderKey = ProviderKey::new("Free Currency Rates API");

    /// Public endpoint used when no override is configured.
    pub const DEFAULT_URL: &'static str =
        "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1";

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

    fn currencies_url(&self, base: &str) -> Url {
        let file = format!("{}.json", base.to_ascii_lowercase());
        http::join_path(&self.base_url, &["currencies", &file])
    }
}

/// Keep only numeric, non-negative values keyed by lowercase code.
fn numeric_rates(raw: &serde_json::Map<String, Value>) -> HashMap<String, f64> {
    raw.iter()
        .filter_map(|(k, v)| {
            v.as_f64()
                .filter(|r| r.is_finite() && *r >= 0.0)
                .map(|r| (k.to_ascii_lowercase(), r))
        })
        .collect()
}

fn select(all: &HashMap<String, f64>, symbols: Option<&str>) -> Rates {
    match http::parse_symbols(symbols) {
        None => all
            .iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), *v))
            .collect(),
        Some(codes) => codes
            .into_iter()
            .filter_map(|code| {
                all.get(&code.to_ascii_lowercase())
                    .map(|rate| (code, *rate))
            })
            .collect(),
    }
}

#[async_trait]
impl RateProvider for FreeCurrencyProvider {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "fawazahmed0"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio::providers::free_currency", skip(self))
    )]
    async fn fetch_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        let url = self.currencies_url(base);
        let body: serde_json::Map<String, Value> =
            http::get_json(&self.client, self.name(), url).await?;

        let key = base.to_ascii_lowercase();
        let Some(Value::Object(raw)) = body.get(&key) else {
            return Ok(RateTable::without_rates(self.name(), base));
        };
        let all = numeric_rates(raw);
        Ok(RateTable::new(self.name(), base, select(&all, symbols)))
    }
}
