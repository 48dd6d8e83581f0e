//! API routes
//!
//! - [`health`] - liveness and business clock
//! - [`fulfillment`] - delivery/pickup windows for checkout

pub mod fulfillment;
pub mod health;
