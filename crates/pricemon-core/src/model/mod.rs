//! Domain model shared by the API and its consumers.
//!
//! - `commodity`: validated commodity identifiers.
//! - `price`: ingest records and stored price points.
//! - `metrics`: baseline model error metrics per commodity.

pub mod commodity;
pub mod metrics;
pub mod price;

pub use commodity::Commodity;
pub use metrics::{ModelMetrics, ModelStatus, BASELINE_MODEL};
pub use price::{PricePoint, PriceRecord, MAX_SOURCE_LEN};
