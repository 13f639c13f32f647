//! Per-commodity price series.
//!
//! Series are kept sorted by timestamp. Inserting a point whose timestamp is
//! already present replaces it; a series never grows past `capacity`, the
//! oldest points go first. Every insert bumps the series generation, which
//! lets readers tell whether a snapshot is still current.

use std::collections::BTreeMap;

use dashmap::DashMap;

use pricemon_core::error::{PriceMonError, Result};
use pricemon_core::model::{Commodity, PricePoint};

pub struct PriceStore {
    capacity: usize,
    series: DashMap<Commodity, Series>,
}

#[derive(Default)]
struct Series {
    points: Vec<PricePoint>,
    generation: u64,
}

impl PriceStore {
    /// Create a store accepting only `supported` commodities.
    pub fn new<'a>(supported: impl IntoIterator<Item = &'a Commodity>, capacity: usize) -> Self {
        let series = DashMap::new();
        for c in supported {
            series.insert(c.clone(), Series::default());
        }
        Self { capacity: capacity.max(1), series }
    }

    pub fn is_supported(&self, commodity: &Commodity) -> bool {
        self.series.contains_key(commodity)
    }

    /// Insert one point. Returns the series length afterwards.
    pub fn insert(&self, commodity: &Commodity, point: PricePoint) -> Result<usize> {
        let mut s = self
            .series
            .get_mut(commodity)
            .ok_or_else(|| PriceMonError::NotFound(format!("unsupported commodity: {commodity}")))?;

        let points = &mut s.points;
        match points.binary_search_by_key(&point.timestamp, |p| p.timestamp) {
            Ok(i) => points[i] = point,
            Err(i) => points.insert(i, point),
        }

        if points.len() > self.capacity {
            let excess = points.len() - self.capacity;
            points.drain(..excess);
        }
        let len = points.len();
        s.generation += 1;
        Ok(len)
    }

    /// Newest `limit` points, oldest first.
    pub fn history(&self, commodity: &Commodity, limit: usize) -> Result<Vec<PricePoint>> {
        let s = self
            .series
            .get(commodity)
            .ok_or_else(|| PriceMonError::NotFound(format!("unsupported commodity: {commodity}")))?;
        let start = s.points.len().saturating_sub(limit);
        Ok(s.points[start..].to_vec())
    }

    /// Generation and prices (oldest first), read under one guard.
    pub fn snapshot(&self, commodity: &Commodity) -> Result<(u64, Vec<f64>)> {
        let s = self
            .series
            .get(commodity)
            .ok_or_else(|| PriceMonError::NotFound(format!("unsupported commodity: {commodity}")))?;
        Ok((s.generation, s.points.iter().map(|p| p.price).collect()))
    }

    pub fn generation(&self, commodity: &Commodity) -> Option<u64> {
        self.series.get(commodity).map(|s| s.generation)
    }

    pub fn total_records(&self) -> u64 {
        self.series.iter().map(|r| r.value().points.len() as u64).sum()
    }

    pub fn counts(&self) -> BTreeMap<String, u64> {
        self.series
            .iter()
            .map(|r| (r.key().to_string(), r.value().points.len() as u64))
            .collect()
    }

    /// Timestamp of the newest point across all series.
    pub fn latest_timestamp(&self) -> Option<u64> {
        self.series
            .iter()
            .filter_map(|r| r.value().points.last().map(|p| p.timestamp))
            .max()
    }
}
