//! Top-level facade crate for the commodity price monitor.
//!
//! Re-exports core types and the API library so users can depend on a single crate.

pub mod core {
    pub use pricemon_core::*;
}

pub mod api {
    pub use pricemon_api::*;
}
