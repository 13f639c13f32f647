//! Price records (ingest shape) and stored price points.

use serde::{Deserialize, Serialize};

use crate::error::{PriceMonError, Result};
use crate::model::Commodity;

/// Longest accepted `source` label, in chars.
pub const MAX_SOURCE_LEN: usize = 64;

/// One observed price as submitted by a client or a price source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceRecord {
    pub commodity: Commodity,
    pub price: f64,
    /// Unix seconds.
    pub timestamp: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_currency() -> String {
    "USD".into()
}
fn default_source() -> String {
    "manual".into()
}

impl PriceRecord {
    /// Validate values and split into the series key and the stored point.
    pub fn into_point(self) -> Result<(Commodity, PricePoint)> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(PriceMonError::BadRequest(format!(
                "price must be a positive number (got {})",
                self.price
            )));
        }
        if self.timestamp == 0 {
            return Err(PriceMonError::BadRequest("timestamp must be > 0".into()));
        }

        let currency = self.currency.trim().to_ascii_uppercase();
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PriceMonError::BadRequest(format!(
                "currency must be a 3-letter code (got {:?})",
                self.currency
            )));
        }

        let source = self.source.trim();
        if source.chars().count() > MAX_SOURCE_LEN {
            return Err(PriceMonError::BadRequest(format!(
                "source must be at most {MAX_SOURCE_LEN} chars"
            )));
        }
        let source = if source.is_empty() { default_source() } else { source.to_string() };

        Ok((
            self.commodity,
            PricePoint {
                timestamp: self.timestamp,
                price: self.price,
                currency,
                source,
            },
        ))
    }
}

/// A stored observation within one commodity series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: u64,
    pub price: f64,
    pub currency: String,
    pub source: String,
}
