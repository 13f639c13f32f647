//! Lightweight in-process metrics and request instrumentation.
//!
//! Metrics are stored as atomics behind `DashMap` label sets and rendered in
//! Prometheus text format by the `/metrics` handler.

pub mod http;
pub mod metrics;

pub use metrics::ApiMetrics;
