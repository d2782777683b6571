//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::cache::SignalCache;
use crate::core::dashboard::{reason_text, render_dashboard};
use crate::metrics::Metrics;
use crate::models::signal::Signal;

pub const SERVICE_NAME: &str = "ictscan-signal-scanner";

#[derive(Clone)]
pub struct AppState {
    pub cache: SignalCache,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    /// Display order for the dashboard and the JSON listing
    pub symbols: Arc<Vec<String>>,
    pub timeframes: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(
        cache: SignalCache,
        metrics: Arc<Metrics>,
        symbols: Vec<String>,
        timeframes: Vec<String>,
    ) -> Self {
        Self {
            cache,
            metrics,
            start_time: Arc::new(Instant::now()),
            symbols: Arc::new(symbols),
            timeframes: Arc::new(timeframes),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignalRow {
    pub symbol: String,
    pub timeframe: String,
    pub signal: Option<Signal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_text: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Dashboard page with one row per configured pair
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let signals = state.cache.snapshot().await;
    Html(render_dashboard(&state.symbols, &state.timeframes, &signals))
}

/// Latest signal per configured pair; `signal` is null for pairs never scored
pub async fn list_signals(State(state): State<AppState>) -> Json<Vec<SignalRow>> {
    let signals = state.cache.snapshot().await;

    let rows = state
        .symbols
        .iter()
        .flat_map(|symbol| {
            let by_tf = signals.get(symbol);
            state.timeframes.iter().map(move |tf| {
                let signal = by_tf.and_then(|m| m.get(tf)).cloned();
                SignalRow {
                    symbol: symbol.clone(),
                    timeframe: tf.clone(),
                    reason_text: signal.as_ref().map(reason_text),
                    signal,
                }
            })
        })
        .collect();

    Json(rows)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/signals", get(list_signals))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!("Dashboard available at http://0.0.0.0:{}/", port);

    axum::serve(listener, app).await?;
    Ok(())
}
