//! Cache of the latest baseline metrics per commodity.
//!
//! Entries carry the price-series generation they were computed from. A
//! lookup only hits when that generation is still the current one, so a
//! refresh racing an ingest can never pin stale metrics.

use dashmap::DashMap;

use pricemon_core::model::{Commodity, ModelMetrics};

#[derive(Default)]
pub struct MetricsRegistry {
    entries: DashMap<Commodity, (u64, ModelMetrics)>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    /// Cached metrics, if computed from series generation `current`.
    pub fn get(&self, commodity: &Commodity, current: u64) -> Option<ModelMetrics> {
        self.entries
            .get(commodity)
            .filter(|r| r.value().0 == current)
            .map(|r| r.value().1.clone())
    }

    /// Store metrics computed from `generation`; an entry from a newer
    /// generation is kept.
    pub fn put(&self, generation: u64, metrics: ModelMetrics) {
        let mut entry = self
            .entries
            .entry(metrics.commodity.clone())
            .or_insert_with(|| (generation, metrics.clone()));
        if entry.0 <= generation {
            *entry = (generation, metrics);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
