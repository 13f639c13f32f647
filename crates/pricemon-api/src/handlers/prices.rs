use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use pricemon_core::error::PriceMonError;
use pricemon_core::model::{Commodity, PricePoint, PriceRecord};

use crate::app_state::AppState;
use crate::error::ApiResult;

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 10_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PriceHistory {
    pub commodity: Commodity,
    pub count: usize,
    pub prices: Vec<PricePoint>,
}

#[derive(Debug, Serialize)]
pub struct IngestAck {
    pub accepted: usize,
    pub commodity: Commodity,
    pub total_records: usize,
}

/// GET /prices/:commodity?limit=N
pub async fn history(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<PriceHistory>> {
    let Path(raw) = path?;
    let Query(q) = query?;

    let limit = q.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(PriceMonError::BadRequest(format!("limit must be between 1 and {MAX_LIMIT}")).into());
    }

    let commodity = state.resolve_commodity(&raw)?;
    let prices = state.prices().history(&commodity, limit)?;
    Ok(Json(PriceHistory { commodity, count: prices.len(), prices }))
}

/// POST /prices
pub async fn ingest(
    State(state): State<AppState>,
    payload: Result<Json<PriceRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IngestAck>)> {
    let Json(record) = payload?;
    let (commodity, total_records) = state.ingest(record)?;
    tracing::debug!(%commodity, total_records, "price ingested");

    Ok((
        StatusCode::CREATED,
        Json(IngestAck { accepted: 1, commodity, total_records }),
    ))
}
