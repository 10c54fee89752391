use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    routing::get,
};
use cambio_core::{MetricsSnapshot, RateTable};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Debug, Deserialize)]
struct RatesQuery {
    symbols: Option<String>,
}

/// Aggregated rates for a base currency, optionally filtered by `symbols`.
async fn get_exchange_rates(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Path(base): Path<String>,
    Query(query): Query<RatesQuery>,
) -> ApiResult<Json<RateTable>> {
    state
        .cambio
        .get_rates(&base, query.symbols.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::from(e).at(uri.path()))
}

/// Counter snapshot for every provider seen so far.
async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.cambio.metrics_snapshot())
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/exchangeRates/{base}", get(get_exchange_rates))
        .route("/metrics", get(get_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
