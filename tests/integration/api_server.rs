//! Integration tests for the HTTP surface

use std::sync::Arc;

use axum_test::TestServer;
use ictscan::cache::SignalCache;
use ictscan::core::dashboard::PLACEHOLDER;
use ictscan::core::http::{create_router, AppState, SERVICE_NAME};
use ictscan::metrics::Metrics;
use ictscan::signals::engine::SignalEngine;
use serde_json::Value;

use crate::fixtures::bullish_series;

struct TestApiServer {
    server: TestServer,
    cache: SignalCache,
}

impl TestApiServer {
    fn new() -> Self {
        let cache = SignalCache::new();
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState::new(
            cache.clone(),
            metrics,
            vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()],
            vec!["1h".to_string()],
        );
        let server = TestServer::new(create_router(state)).expect("start test server");
        Self { server, cache }
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new();
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], SERVICE_NAME);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new();
    app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("scan_passes_total"));
    assert!(body.contains("cached_signals"));
}

#[tokio::test]
async fn dashboard_shows_placeholder_before_first_scan() {
    let app = TestApiServer::new();
    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert_eq!(html.matches(PLACEHOLDER).count(), 2);
    assert!(html.contains("BTCUSDT, ETHUSDT"));
}

#[tokio::test]
async fn dashboard_renders_cached_signal() {
    let app = TestApiServer::new();
    app.cache
        .insert(SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series()))
        .await;

    let html = app.server.get("/").await.text();
    assert!(html.contains("<td>LONG</td>"));
    assert_eq!(html.matches(PLACEHOLDER).count(), 1);
}

#[tokio::test]
async fn signals_endpoint_lists_every_configured_pair() {
    let app = TestApiServer::new();
    app.cache
        .insert(SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series()))
        .await;

    let response = app.server.get("/api/signals").await;
    assert_eq!(response.status_code(), 200);

    let rows: Value = response.json();
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["symbol"], "BTCUSDT");
    assert_eq!(rows[0]["signal"]["side"], "LONG");
    assert_eq!(rows[0]["signal"]["reason"]["code"], "bullish_discount_ote");
    assert!(rows[0]["reason_text"]
        .as_str()
        .unwrap()
        .starts_with("[1h] Bullish bias"));

    assert_eq!(rows[1]["symbol"], "ETHUSDT");
    assert!(rows[1]["signal"].is_null());
}
