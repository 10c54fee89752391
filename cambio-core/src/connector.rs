use async_trait::async_trait;

use crate::{CambioError, ProviderKey, RateTable};

/// Capability implemented by every upstream exchange-rate source.
///
/// Adapters own their wire format, symbol filtering and case handling. Anything that
/// prevents a usable table (transport errors, non-2xx statuses, undecodable payloads,
/// timeouts) must be reported as `Err`; the engine counts it as a failure and leaves
/// the provider out of the merge.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Stable identifier, also used as the provider's metrics identity.
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch latest rates for `base`.
    ///
    /// `symbols` is a comma-separated list of target currencies. `None` means no
    /// filter; the engine never passes an empty string.
    async fn fetch_rates(&self, base: &str, symbols: Option<&str>)
    -> Result<RateTable, CambioError>;
}

/// Outcome of one provider call during a fan-out.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResult {
    /// The provider returned a table (its `rates` may still be absent).
    Available(RateTable),
    /// The provider produced nothing usable.
    Unavailable(CambioError),
}

impl ProviderResult {
    /// The table, if the call succeeded.
    #[must_use]
    pub const fn table(&self) -> Option<&RateTable> {
        match self {
            Self::Available(t) => Some(t),
            Self::Unavailable(_) => None,
        }
    }

    /// Consume into the table, if the call succeeded.
    #[must_use]
    pub fn into_table(self) -> Option<RateTable> {
        match self {
            Self::Available(t) => Some(t),
            Self::Unavailable(_) => None,
        }
    }

    /// True when the call succeeded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl From<Result<RateTable, CambioError>> for ProviderResult {
    fn from(res: Result<RateTable, CambioError>) -> Self {
        match res {
            Ok(t) => Self::Available(t),
            Err(e) => Self::Unavailable(e),
        }
    }
}
