//! ICT Signal Scanner
//!
//! Periodically scans every configured (symbol, timeframe) pair on Bybit,
//! keeps the latest signal per pair in memory and serves a dashboard.
//! No orders are placed.

use dotenvy::dotenv;
use ictscan::cache::SignalCache;
use ictscan::config::{get_environment, ScannerConfig};
use ictscan::core::http::{start_server, AppState};
use ictscan::core::scanner::PairScanner;
use ictscan::core::scheduler::ScanScheduler;
use ictscan::logging;
use ictscan::metrics::Metrics;
use ictscan::services::bybit::BybitClient;
use ictscan::services::market_data::CandleSource;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = get_environment();
    info!("Starting ICT Signal Scanner");
    info!(environment = %env, "Environment");

    let config = ScannerConfig::load()?;
    info!(
        symbols = ?config.symbols,
        timeframes = ?config.timeframes,
        interval_secs = config.scan_interval.as_secs(),
        concurrency = config.concurrency,
        "Scanner configuration loaded"
    );
    if config.symbols.is_empty() || config.timeframes.is_empty() {
        warn!("No symbols or timeframes configured - scan passes will be no-ops");
    }

    let metrics = Arc::new(Metrics::new()?);

    let source: Arc<dyn CandleSource> = Arc::new(BybitClient::new(
        config.bybit_base_url.clone(),
        config.fetch_timeout,
    )?);

    let cache = SignalCache::new();
    let scanner = PairScanner::new(source, cache.clone(), config.pairs())
        .with_concurrency(config.concurrency)
        .with_fetch_timeout(config.fetch_timeout)
        .with_metrics(metrics.clone());

    let scheduler = ScanScheduler::new(Arc::new(scanner), config.scan_interval)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    let state = AppState::new(
        scheduler.cache(),
        metrics,
        config.symbols.clone(),
        config.timeframes.clone(),
    );
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Scanner started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down scanner...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    scheduler.stop().await;
    info!("Scanner stopped");
    Ok(())
}
