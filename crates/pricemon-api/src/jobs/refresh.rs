//! Built-in jobs: pull prices from a source, recompute model metrics.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use pricemon_core::error::Result;

use super::{Job, PriceSource};
use crate::app_state::AppState;

pub struct PriceRefreshJob {
    source: Arc<dyn PriceSource>,
    interval: Duration,
}

impl PriceRefreshJob {
    pub fn new(source: Arc<dyn PriceSource>, interval: Duration) -> Self {
        Self { source, interval }
    }
}

#[async_trait]
impl Job for PriceRefreshJob {
    fn name(&self) -> &'static str {
        "price_refresh"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run(&self, state: &AppState) -> Result<()> {
        let batch = self.source.fetch().await?;
        let fetched = batch.records.len() + batch.unparsed;
        let skipped = &state.metrics().price_rows_skipped;
        if batch.unparsed > 0 {
            skipped.add(&[("reason", "unparsed")], batch.unparsed as u64);
        }

        let mut accepted = 0usize;
        for record in batch.records {
            match state.ingest(record) {
                Ok(_) => accepted += 1,
                Err(e) => {
                    skipped.inc(&[("reason", "rejected")]);
                    tracing::debug!(source = %self.source.label(), error = %e, "price record skipped");
                }
            }
        }

        tracing::info!(source = %self.source.label(), fetched, accepted, "prices refreshed");
        Ok(())
    }
}

pub struct MetricsRefreshJob {
    interval: Duration,
}

impl MetricsRefreshJob {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl Job for MetricsRefreshJob {
    fn name(&self) -> &'static str {
        "metrics_refresh"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run(&self, state: &AppState) -> Result<()> {
        for commodity in state.commodities() {
            let m = state.refresh_model_metrics(commodity)?;
            tracing::debug!(%commodity, samples = m.samples, "model metrics refreshed");
        }
        Ok(())
    }
}
