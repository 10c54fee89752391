use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Datasource marker carried by tables produced by averaging several providers.
pub const AGGREGATED_DATASOURCE: &str = "Aggregated from multiple sources";

/// Mapping from target currency code to rate.
pub type Rates = BTreeMap<String, f64>;

/// A table of exchange rates relative to a single base currency.
///
/// `rates: None` means the origin had no data at all, which is distinct from an
/// empty mapping. Absent fields are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Identity of the origin: a provider name or [`AGGREGATED_DATASOURCE`].
    pub datasource: String,
    /// Base currency code the rates are quoted against.
    pub base: String,
    /// Target currency code to rate, if the origin returned any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<Rates>,
    /// When the table was produced, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl RateTable {
    /// Build a table with rates and no timestamp.
    pub fn new(datasource: impl Into<String>, base: impl Into<String>, rates: Rates) -> Self {
        Self {
            datasource: datasource.into(),
            base: base.into(),
            rates: Some(rates),
            timestamp: None,
        }
    }

    /// Build a table that carries no rate data.
    pub fn without_rates(datasource: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            datasource: datasource.into(),
            base: base.into(),
            rates: None,
            timestamp: None,
        }
    }

    /// Attach a production timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Rate for a target currency, if present.
    #[must_use]
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.as_ref().and_then(|r| r.get(currency).copied())
    }

    /// True when the table was produced by the averaging merge.
    #[must_use]
    pub fn is_aggregated(&self) -> bool {
        self.datasource == AGGREGATED_DATASOURCE
    }
}
