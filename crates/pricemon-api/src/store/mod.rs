//! In-memory stores shared by handlers and background jobs.

pub mod model_metrics;
pub mod prices;

pub use model_metrics::MetricsRegistry;
pub use prices::PriceStore;
