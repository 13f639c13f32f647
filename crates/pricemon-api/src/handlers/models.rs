use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use pricemon_core::model::ModelMetrics;

use crate::app_state::AppState;
use crate::error::ApiResult;

#[derive(Debug, Serialize)]
pub struct ModelMetricsList {
    pub models: Vec<ModelMetrics>,
    pub count: usize,
}

/// GET /models/metrics
pub async fn all_metrics(State(state): State<AppState>) -> ApiResult<Json<ModelMetricsList>> {
    let models = state
        .commodities()
        .iter()
        .map(|c| state.model_metrics_for(c))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ModelMetricsList { count: models.len(), models }))
}

/// GET /models/metrics/:commodity
pub async fn commodity_metrics(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ModelMetrics>> {
    let Path(raw) = path?;
    let commodity = state.resolve_commodity(&raw)?;
    Ok(Json(state.model_metrics_for(&commodity)?))
}
