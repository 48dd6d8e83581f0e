//! Utilities
//!
//! - [`logger`] - tracing setup
//! - [`time`] - business timezone conversions
//! - Error types re-exported from `shared::error`

pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
