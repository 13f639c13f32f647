//! Shared application state for the price monitor API.
//!
//! Built once at startup from a validated config, then cloned into every
//! handler and background job.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use pricemon_core::error::{PriceMonError, Result};
use pricemon_core::model::{Commodity, ModelMetrics, PriceRecord};

use crate::config::ApiConfig;
use crate::obs::ApiMetrics;
use crate::store::{MetricsRegistry, PriceStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    prices: PriceStore,
    model_metrics: MetricsRegistry,
    metrics: ApiMetrics,
    started: Instant,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ApiConfig) -> Result<Self> {
        cfg.validate()?;

        let prices = PriceStore::new(&cfg.commodities, cfg.store.max_records_per_commodity);

        tracing::info!(
            commodities = cfg.commodities.len(),
            capacity = cfg.store.max_records_per_commodity,
            jobs_enabled = cfg.jobs.enabled,
            "application state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                prices,
                model_metrics: MetricsRegistry::new(),
                metrics: ApiMetrics::default(),
                started: Instant::now(),
            }),
        })
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    /// Supported commodities, in config order.
    pub fn commodities(&self) -> &[Commodity] {
        &self.inner.cfg.commodities
    }

    pub fn prices(&self) -> &PriceStore {
        &self.inner.prices
    }

    pub fn model_metrics(&self) -> &MetricsRegistry {
        &self.inner.model_metrics
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn jobs_enabled(&self) -> bool {
        self.inner.cfg.jobs.enabled
    }

    pub fn uptime(&self) -> Duration {
        self.inner.started.elapsed()
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    /// Parse a path/query identifier and check it is served here.
    pub fn resolve_commodity(&self, raw: &str) -> Result<Commodity> {
        let c = Commodity::parse(raw)?;
        if !self.inner.prices.is_supported(&c) {
            return Err(PriceMonError::NotFound(format!("unsupported commodity: {c}")));
        }
        Ok(c)
    }

    /// Validate and store one record. Returns the commodity and its new series length.
    pub fn ingest(&self, record: PriceRecord) -> Result<(Commodity, usize)> {
        let (commodity, point) = record.into_point()?;
        let len = self.inner.prices.insert(&commodity, point)?;

        // Labels are bounded by the configured commodity set.
        let m = &self.inner.metrics;
        m.prices_ingested.inc(&[("commodity", commodity.as_str())]);
        m.price_records.set(&[("commodity", commodity.as_str())], len as i64);

        Ok((commodity, len))
    }

    /// Recompute baseline metrics for one commodity and cache them under the
    /// series generation they were computed from.
    pub fn refresh_model_metrics(&self, commodity: &Commodity) -> Result<ModelMetrics> {
        let (generation, prices) = self.inner.prices.snapshot(commodity)?;
        let metrics = ModelMetrics::evaluate(
            commodity.clone(),
            &prices,
            self.inner.cfg.models.evaluation_window,
            unix_now(),
        );
        self.inner.model_metrics.put(generation, metrics.clone());
        Ok(metrics)
    }

    /// Cached metrics, evaluated on demand when the cache is missing or was
    /// computed from an older series generation.
    pub fn model_metrics_for(&self, commodity: &Commodity) -> Result<ModelMetrics> {
        let current = self
            .inner
            .prices
            .generation(commodity)
            .ok_or_else(|| PriceMonError::NotFound(format!("unsupported commodity: {commodity}")))?;
        match self.inner.model_metrics.get(commodity, current) {
            Some(m) => Ok(m),
            None => self.refresh_model_metrics(commodity),
        }
    }

    /// Extra gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("pricemon_uptime_seconds", self.uptime().as_secs()),
            ("pricemon_price_records_total", self.inner.prices.total_records()),
            ("pricemon_supported_commodities", self.commodities().len() as u64),
            ("pricemon_background_jobs_enabled", u64::from(self.jobs_enabled())),
        ]
    }
}

/// Current wall clock in unix seconds (0 if the clock is before the epoch).
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
