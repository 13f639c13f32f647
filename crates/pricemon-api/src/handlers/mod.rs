//! HTTP handlers for the public API surface.
//!
//! - `/`, `/health`, `/dashboard/config` : service status
//! - `/stats`                           : store summary
//! - `/models/metrics[/:commodity]`     : baseline model metrics
//! - `/prices`, `/prices/:commodity`    : ingest and history

pub mod models;
pub mod prices;
pub mod stats;
pub mod status;
