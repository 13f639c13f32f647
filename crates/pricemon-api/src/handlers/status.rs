use axum::{extract::State, Json};
use serde::Serialize;

use pricemon_core::dashboard::DashboardSettings;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub service: String,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub background_jobs: &'static str,
    pub uptime_secs: u64,
    pub commodities_tracked: usize,
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootStatus> {
    Json(RootStatus {
        service: state.cfg().dashboard.title.clone(),
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: if state.is_draining() { "draining" } else { "healthy" },
        background_jobs: if state.jobs_enabled() { "enabled" } else { "disabled" },
        uptime_secs: state.uptime().as_secs(),
        commodities_tracked: state.commodities().len(),
    })
}

/// GET /dashboard/config
pub async fn dashboard_config(State(state): State<AppState>) -> Json<DashboardSettings> {
    Json(state.cfg().dashboard.clone())
}
