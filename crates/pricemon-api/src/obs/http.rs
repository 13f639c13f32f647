//! Per-request counters and latency, keyed by matched route.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Route-level middleware (installed with `route_layer`, so the matched path
/// is known and unknown paths do not create label sets).
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();

    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();

    let status = resp.status();
    let metrics = state.metrics();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .http_request_duration
        .observe(&[("method", method.as_str()), ("route", route.as_str())], elapsed);

    if status.is_server_error() {
        tracing::warn!(%method, %route, status = status.as_u16(), "request failed");
    }
    resp
}
