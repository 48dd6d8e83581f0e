//! Data models
//!
//! Shared between storefront-server and the storefront frontend (via API).

pub mod fulfillment;

// Re-exports
pub use fulfillment::*;
