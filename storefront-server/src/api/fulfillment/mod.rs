//! Fulfillment API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/fulfillment/windows | GET | selectable dates (`?kind=delivery\|pickup`) |
//! | /api/fulfillment/validate | POST | check a chosen date before placing an order |
//! | /api/fulfillment/settings | GET | configured cutoff, lead time and days |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/fulfillment", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/windows", get(handler::windows))
        .route("/validate", post(handler::validate))
        .route("/settings", get(handler::settings))
}
