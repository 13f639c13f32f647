//! pricemon core: transport-agnostic domain types and the shared error surface.
//!
//! This crate defines the commodity identifier, price records, model metric
//! shapes and dashboard settings shared by the API service and its consumers.
//! It carries no HTTP or runtime dependencies so the dashboard side can reuse
//! it without pulling in the server stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `PriceMonError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dashboard;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{ClientCode, PriceMonError, Result};
