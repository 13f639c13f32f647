use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use pricemon_core::model::Commodity;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub total_price_records: u64,
    pub supported_commodities: Vec<Commodity>,
    pub records_by_commodity: BTreeMap<String, u64>,
    /// Unix seconds of the newest stored record.
    pub latest_update: Option<u64>,
}

/// GET /stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsSummary> {
    let prices = state.prices();
    Json(StatsSummary {
        total_price_records: prices.total_records(),
        supported_commodities: state.commodities().to_vec(),
        records_by_commodity: prices.counts(),
        latest_update: prices.latest_timestamp(),
    })
}
