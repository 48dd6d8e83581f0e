//! Shared types for the bakery storefront
//!
//! Common types used by the server and its API consumers: the unified
//! error system and the fulfillment scheduling models.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    CutoffRule, FulfillmentDayRule, FulfillmentKind, FulfillmentQuote, FulfillmentSelection,
    FulfillmentSettings, FulfillmentWindow,
};
