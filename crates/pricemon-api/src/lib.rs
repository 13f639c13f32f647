//! Commodity price monitor API library entry.
//!
//! This crate wires config, stores, background jobs, and HTTP handlers into
//! the API service. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
