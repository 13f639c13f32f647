//! Baseline model metrics.
//!
//! The reported model is a naive persistence forecaster: the next price is
//! predicted to equal the current one. Its one-step-ahead errors over a
//! trailing window give the dashboard a reference accuracy per commodity.

use serde::{Deserialize, Serialize};

use crate::model::Commodity;

/// Name reported in `ModelMetrics::model`.
pub const BASELINE_MODEL: &str = "naive_persistence";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    Ready,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub commodity: Commodity,
    pub model: String,
    pub status: ModelStatus,
    /// Number of evaluated one-step forecasts.
    pub samples: usize,
    pub mae: Option<f64>,
    pub rmse: Option<f64>,
    /// Mean absolute percentage error, in percent.
    pub mape: Option<f64>,
    pub last_price: Option<f64>,
    /// Unix seconds.
    pub evaluated_at: u64,
}

impl ModelMetrics {
    /// Evaluate the baseline over the last `window` forecasts of `prices`
    /// (oldest first). Needs at least two prices to be `Ready`.
    pub fn evaluate(commodity: Commodity, prices: &[f64], window: usize, now: u64) -> Self {
        let start = prices.len().saturating_sub(window.saturating_add(1));
        let tail = &prices[start..];

        let mut abs_sum = 0.0;
        let mut sq_sum = 0.0;
        let mut pct_sum = 0.0;
        let mut samples = 0usize;

        for pair in tail.windows(2) {
            let (predicted, actual) = (pair[0], pair[1]);
            let err = actual - predicted;
            abs_sum += err.abs();
            sq_sum += err * err;
            pct_sum += err.abs() / actual;
            samples += 1;
        }

        let last_price = prices.last().copied();

        if samples == 0 {
            return Self {
                commodity,
                model: BASELINE_MODEL.into(),
                status: ModelStatus::InsufficientData,
                samples: 0,
                mae: None,
                rmse: None,
                mape: None,
                last_price,
                evaluated_at: now,
            };
        }

        let n = samples as f64;
        Self {
            commodity,
            model: BASELINE_MODEL.into(),
            status: ModelStatus::Ready,
            samples,
            mae: Some(abs_sum / n),
            rmse: Some((sq_sum / n).sqrt()),
            mape: Some(100.0 * pct_sum / n),
            last_price,
            evaluated_at: now,
        }
    }
}
