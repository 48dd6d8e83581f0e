//! HTTP-level checks against a router pinned to a fixed business time

use std::sync::Arc;

use axum::body::Body;
use chrono::TimeZone;
use chrono_tz::America::Boise;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_server::{Config, FixedClock, ServerState, build_app};

fn app_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> axum::Router {
    let clock = FixedClock::at(Boise.with_ymd_and_hms(y, m, d, h, min, 0).unwrap());
    let state = ServerState::with_clock(&Config::default(), Arc::new(clock)).unwrap();
    build_app(state)
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn dates(body: &Value) -> Vec<&str> {
    body["windows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["date"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_reports_business_time() {
    let (status, body) = send(app_at(2025, 6, 2, 10, 0), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["timezone"], "America/Boise");
    assert_eq!(body["business_time"], "2025-06-02T10:00:00-06:00");
}

#[tokio::test]
async fn test_windows_before_cutoff() {
    let (status, body) = send(
        app_at(2025, 6, 2, 10, 0),
        get("/api/fulfillment/windows?kind=delivery"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["before_cutoff"], true);
    assert_eq!(body["ordering_closes_at"], "2025-06-04T00:00:00-06:00");
    assert_eq!(dates(&body), vec!["2025-06-05", "2025-06-07"]);

    let thursday = &body["windows"][0];
    assert_eq!(thursday["kind"], "delivery");
    assert_eq!(thursday["day_name"], "Thursday");
    assert_eq!(thursday["time_window"], "10:00 AM - 2:00 PM");
    assert_eq!(thursday["days_away"], 3);
    assert_eq!(thursday["meets_lead_time"], true);
}

#[tokio::test]
async fn test_windows_after_cutoff_roll_a_week() {
    let (status, body) = send(
        app_at(2025, 6, 4, 8, 0),
        get("/api/fulfillment/windows?kind=pickup"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["before_cutoff"], false);
    assert_eq!(dates(&body), vec!["2025-06-12", "2025-06-14"]);
    assert_eq!(body["windows"][0]["time_window"], "8:00 AM - 12:00 PM");
    assert_eq!(body["windows"][0]["meets_lead_time"], true);
    assert_eq!(body["windows"][1]["meets_lead_time"], true);
}

#[tokio::test]
async fn test_windows_without_kind_lists_both() {
    let (status, body) = send(app_at(2025, 6, 2, 10, 0), get("/api/fulfillment/windows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["windows"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_windows_unknown_kind() {
    let (status, body) = send(
        app_at(2025, 6, 2, 10, 0),
        get("/api/fulfillment/windows?kind=drone"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
    assert_eq!(body["details"]["value"], "drone");
}

#[tokio::test]
async fn test_validate_offered_date() {
    let (status, body) = send(
        app_at(2025, 6, 2, 10, 0),
        post_json(
            "/api/fulfillment/validate",
            json!({ "kind": "delivery", "date": "2025-06-05" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-06-05");
    assert_eq!(body["day_of_week"], 4);
}

#[tokio::test]
async fn test_validate_date_closed_by_cutoff() {
    let (status, body) = send(
        app_at(2025, 6, 4, 8, 0),
        post_json(
            "/api/fulfillment/validate",
            json!({ "kind": "delivery", "date": "2025-06-05" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4101);
    assert_eq!(body["message"], "delivery is not available on 2025-06-05");
}

#[tokio::test]
async fn test_validate_malformed_date() {
    let (status, body) = send(
        app_at(2025, 6, 2, 10, 0),
        post_json(
            "/api/fulfillment/validate",
            json!({ "kind": "pickup", "date": "06/05/2025" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "date");
}

#[tokio::test]
async fn test_settings() {
    let (status, body) = send(app_at(2025, 6, 2, 10, 0), get("/api/fulfillment/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "America/Boise");
    assert_eq!(body["cutoff"]["cutoff_day"], 2);
    assert_eq!(body["cutoff"]["cutoff_time"], "23:59");
    assert_eq!(body["lead_time_days"], 2);
    assert_eq!(body["delivery"][1]["day_of_week"], 6);
}

#[tokio::test]
async fn test_validate_malformed_body() {
    let (status, body) = send(
        app_at(2025, 6, 2, 10, 0),
        post_json("/api/fulfillment/validate", json!({ "kind": "delivery" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = send(app_at(2025, 6, 2, 10, 0), get("/api/orders")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["message"], "Route /api/orders not found");
}
