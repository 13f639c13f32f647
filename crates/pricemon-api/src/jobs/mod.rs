//! Background jobs and their scheduler.
//!
//! Jobs are periodic, non-request-triggered tasks. Whether any of them run is
//! decided once at startup by `jobs.enabled`; a disabled config yields a
//! no-op scheduler.

pub mod refresh;
pub mod scheduler;
pub mod source;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use pricemon_core::error::Result;

use crate::app_state::AppState;

pub use refresh::{MetricsRefreshJob, PriceRefreshJob};
pub use scheduler::Scheduler;
pub use source::{FileSource, PriceSource, SourceBatch};

/// A periodic task run by the scheduler.
#[async_trait]
pub trait Job: Send + Sync {
    fn name(&self) -> &'static str;
    fn interval(&self) -> Duration;
    async fn run(&self, state: &AppState) -> Result<()>;
}

/// Jobs implied by the config: metrics refresh always, price refresh only
/// when a price source is configured.
pub fn default_jobs(state: &AppState) -> Vec<Arc<dyn Job>> {
    let jobs_cfg = &state.cfg().jobs;
    let mut jobs: Vec<Arc<dyn Job>> = Vec::new();

    if let Some(src) = &jobs_cfg.price_source {
        let source = Arc::new(FileSource::new(src.path.clone()));
        jobs.push(Arc::new(PriceRefreshJob::new(source, jobs_cfg.price_refresh_interval())));
    }
    jobs.push(Arc::new(MetricsRefreshJob::new(jobs_cfg.metrics_refresh_interval())));

    jobs
}
