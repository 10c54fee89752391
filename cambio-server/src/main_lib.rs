use std::sync::Arc;

use cambio::Cambio;
use cambio_middleware::MokaRateCache;
use cambio_providers::{FrankfurterProvider, FreeCurrencyProvider};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared handler state.
pub struct AppState {
    pub cambio: Cambio,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wire both HTTP providers, the moka cache and in-memory metrics into an engine.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let frankfurter = FrankfurterProvider::builder(&config.frankfurter)?.build();
    let free_currency = FreeCurrencyProvider::builder(&config.free_currency)?.build();
    tracing::info!(
        frankfurter = %config.frankfurter.base_url,
        free_currency = %config.free_currency.base_url,
        cache_ttl_secs = config.engine.cache_ttl.as_secs(),
        "providers configured"
    );

    let cambio = Cambio::builder()
        .with_provider(frankfurter)
        .with_provider(free_currency)
        .cache(Arc::new(MokaRateCache::new(&config.cache)))
        .config(config.engine.clone())
        .build()?;
    Ok(Arc::new(AppState { cambio }))
}
