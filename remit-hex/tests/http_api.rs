//! Integration tests for the HTTP surface.
//!
//! These drive the full axum router (handlers, middleware, JSON shapes)
//! against the in-memory store and a fixed exchange rate.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use remit_hex::{TransferService, inbound::HttpServer};
use remit_rates::FixedRate;
use remit_store::MemoryStore;
use remit_types::{RateError, RateProvider};

/// Provider whose upstream is permanently down.
struct FailingRate;

#[async_trait::async_trait]
impl RateProvider for FailingRate {
    async fn current_rate(&self) -> Result<f64, RateError> {
        Err(RateError::Unavailable("connection refused".into()))
    }
}

fn test_server() -> HttpServer<MemoryStore, FixedRate> {
    let service = TransferService::new(MemoryStore::new(), FixedRate(171.5), 171.5);
    HttpServer::new(service)
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_server().router();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}

#[tokio::test]
async fn preview_prices_a_source_driven_transfer() {
    let app = test_server().router();

    let response = app
        .oneshot(post_json(
            "/preview",
            r#"{"input_mode":"SOURCE_INPUT","source_amount":10000}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source_amount"], 10000);
    assert_eq!(body["dest_amount"], 1_715_000);
    assert_eq!(body["fee"], 100);
    assert_eq!(body["net_source_amount"], 9900);
    assert_eq!(body["rate_source"], "live");
}

#[tokio::test]
async fn preview_prices_a_dest_driven_transfer() {
    let app = test_server().router();

    let response = app
        .oneshot(post_json(
            "/preview",
            r#"{"input_mode":"DEST_INPUT","dest_amount":1715000}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source_amount"], 10000);
    assert_eq!(body["fee"], 100);
}

#[tokio::test]
async fn preview_without_the_driving_amount_is_rejected() {
    let app = test_server().router();

    let response = app
        .oneshot(post_json("/preview", r#"{"input_mode":"SOURCE_INPUT"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("source_amount is required")
    );
}

#[tokio::test]
async fn preview_enforces_the_minimum_on_the_source_path() {
    let app = test_server().router();

    let response = app
        .clone()
        .oneshot(post_json(
            "/preview",
            r#"{"input_mode":"SOURCE_INPUT","source_amount":99}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/preview",
            r#"{"input_mode":"SOURCE_INPUT","source_amount":100}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn simulate_commits_and_is_retrievable_by_id() {
    let app = test_server().router();

    let response = app
        .clone()
        .oneshot(post_json(
            "/simulate",
            r#"{"input_mode":"SOURCE_INPUT","source_amount":10000}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["input_mode"], "SOURCE_INPUT");

    let response = app.oneshot(get("/history/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn simulate_is_never_idempotent() {
    let app = test_server().router();
    let body = r#"{"input_mode":"SOURCE_INPUT","source_amount":1000}"#;

    let first = json_body(app.clone().oneshot(post_json("/simulate", body)).await.unwrap()).await;
    let second = json_body(app.clone().oneshot(post_json("/simulate", body)).await.unwrap()).await;

    assert_ne!(first["id"], second["id"]);

    let history = json_body(app.oneshot(get("/history")).await.unwrap()).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn preview_does_not_grow_the_history() {
    let app = test_server().router();
    let body = r#"{"input_mode":"SOURCE_INPUT","source_amount":1000}"#;

    for _ in 0..3 {
        let response = app.clone().oneshot(post_json("/preview", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let history = json_body(app.oneshot(get("/history")).await.unwrap()).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn history_is_newest_first() {
    let app = test_server().router();

    for amount in [1000, 2000, 3000] {
        let body = format!(r#"{{"input_mode":"SOURCE_INPUT","source_amount":{amount}}}"#);
        app.clone()
            .oneshot(post_json("/simulate", &body))
            .await
            .unwrap();
    }

    let history = json_body(app.oneshot(get("/history")).await.unwrap()).await;
    let amounts: Vec<i64> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["source_amount"].as_i64().unwrap())
        .collect();

    assert_eq!(amounts, vec![3000, 2000, 1000]);
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_distinguished() {
    let app = test_server().router();

    let response = app.clone().oneshot(get("/history/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/history/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exchange_rate_reports_the_live_source() {
    let app = test_server().router();

    let body = json_body(app.oneshot(get("/exchange-rate")).await.unwrap()).await;

    assert_eq!(body["base"], "JPY");
    assert_eq!(body["target"], "VND");
    assert_eq!(body["rate"], 171.5);
    assert_eq!(body["source"], "live");
}

#[tokio::test]
async fn exchange_rate_fallback_is_observable() {
    let service = TransferService::new(MemoryStore::new(), FailingRate, 171.5);
    let app = HttpServer::new(service).router();

    let body = json_body(app.clone().oneshot(get("/exchange-rate")).await.unwrap()).await;
    assert_eq!(body["rate"], 171.5);
    assert_eq!(body["source"], "fallback");

    // Quoting keeps working in degraded mode and says so.
    let response = app
        .oneshot(post_json(
            "/preview",
            r#"{"input_mode":"SOURCE_INPUT","source_amount":10000}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["rate_source"], "fallback");
}

#[tokio::test]
async fn fee_structure_lists_the_four_bands() {
    let app = test_server().router();

    let body = json_body(app.oneshot(get("/fee-structure")).await.unwrap()).await;

    assert_eq!(body["currency"], "JPY");
    let tiers = body["tiers"].as_array().unwrap();
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[0]["min_amount"], 100);
    assert_eq!(tiers[0]["max_amount"], 10000);
    assert_eq!(tiers[0]["fee"], 100);
    assert!(tiers[3]["max_amount"].is_null());
    assert_eq!(tiers[3]["fee"], 1000);
}

#[tokio::test]
async fn calculate_fee_answers_and_validates() {
    let app = test_server().router();

    let response = app
        .clone()
        .oneshot(get("/calculate-fee?amount=25000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["amount"], 25000);
    assert_eq!(body["fee"], 400);
    assert_eq!(body["currency"], "JPY");

    let response = app.oneshot(get("/calculate-fee?amount=50")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_beyond_the_quota_get_429() {
    let service = TransferService::new(MemoryStore::new(), FixedRate(171.5), 171.5);
    let app = HttpServer::with_rate_limit(service, 2).router();

    for _ in 0..2 {
        let response = app.clone().oneshot(get("/history")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Health stays reachable for probes.
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
