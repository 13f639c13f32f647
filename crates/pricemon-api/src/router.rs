//! Axum router wiring.
//!
//! Public API routes are instrumented by the request-metrics middleware; ops
//! routes are not, so scrapes and health checks do not skew request counters.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health))
        .route("/stats", get(handlers::stats::stats))
        .route("/models/metrics", get(handlers::models::all_metrics))
        .route("/models/metrics/:commodity", get(handlers::models::commodity_metrics))
        .route("/prices", post(handlers::prices::ingest))
        .route("/prices/:commodity", get(handlers::prices::history))
        .route("/dashboard/config", get(handlers::status::dashboard_config))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::http::track_requests));

    let ops = Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics));

    api.merge(ops)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
