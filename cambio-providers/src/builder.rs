use std::sync::Arc;

use cambio_core::{CambioError, HttpProviderConfig, RateProvider};
use cambio_middleware::ProviderBuilder;

use crate::{FrankfurterProvider, FreeCurrencyProvider};

/// Builder type alias specialized for HTTP providers.
pub type HttpProviderBuilder = ProviderBuilder;

impl FrankfurterProvider {
    /// Returns a builder wrapping a new provider with a timeout layer set to
    /// `cfg.timeout`, so a stalled upstream surfaces as a failure.
    ///
    /// Customize with the builder methods before calling `.build()`.
    ///
    /// # Errors
    /// Propagates construction errors from [`FrankfurterProvider::new_raw`].
    pub fn builder(cfg: &HttpProviderConfig) -> Result<HttpProviderBuilder, CambioError> {
        let raw: Arc<dyn RateProvider> = Arc::new(Self::new_raw(cfg)?);
        Ok(ProviderBuilder::new(raw).with_timeout(cfg.timeout))
    }
}

impl FreeCurrencyProvider {
    /// Returns a builder wrapping a new provider with a timeout layer set to
    /// `cfg.timeout`.
    ///
    /// # Errors
    /// Propagates construction errors from [`FreeCurrencyProvider::new_raw`].
    pub fn builder(cfg: &HttpProviderConfig) -> Result<HttpProviderBuilder, CambioError> {
        let raw: Arc<dyn RateProvider> = Arc::new(Self::new_raw(cfg)?);
        Ok(ProviderBuilder::new(raw).with_timeout(cfg.timeout))
    }
}
