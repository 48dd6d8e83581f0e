//! Fulfillment API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use shared::{
    FulfillmentKind, FulfillmentQuote, FulfillmentSelection, FulfillmentSettings, FulfillmentWindow,
};

use crate::core::ServerState;
use crate::fulfillment::quote;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct WindowsQuery {
    /// `delivery` or `pickup`; both when omitted
    pub kind: Option<String>,
}

/// Selectable windows as of now
pub async fn windows(
    State(state): State<ServerState>,
    Query(query): Query<WindowsQuery>,
) -> AppResult<Json<FulfillmentQuote>> {
    let kind = query
        .kind
        .as_deref()
        .map(str::parse::<FulfillmentKind>)
        .transpose()?;

    let now = state.business_now();
    Ok(Json(quote::build_quote(&state.schedule, &now, kind)))
}

/// Confirm a chosen date is still offered
pub async fn validate(
    State(state): State<ServerState>,
    payload: Result<Json<FulfillmentSelection>, JsonRejection>,
) -> AppResult<Json<FulfillmentWindow>> {
    let Json(selection) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;

    let now = state.business_now();
    let window = quote::validate_selection(&state.schedule, &now, &selection).inspect_err(|e| {
        let (kind, date) = (selection.kind, selection.date.as_str());
        if e.is_invalid_input() {
            tracing::debug!(%kind, date, "Malformed selection: {}", e);
        } else {
            tracing::info!(%kind, date, "Selection rejected: {}", e);
        }
    })?;
    Ok(Json(window))
}

/// Active fulfillment rules
pub async fn settings(State(state): State<ServerState>) -> Json<FulfillmentSettings> {
    Json(state.schedule.settings().clone())
}
