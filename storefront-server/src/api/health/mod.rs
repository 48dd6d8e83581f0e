//! Health check routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | status, version and current business time |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "timezone": "America/Boise",
//!   "business_time": "2025-06-02T10:00:00-06:00"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timezone: String,
    business_time: DateTime<FixedOffset>,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timezone: state.schedule.timezone().name().to_string(),
        business_time: state.business_now().fixed_offset(),
    })
}
