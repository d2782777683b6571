//! Scan pass coordinator: fetch, score and cache every configured pair

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::stream::{self, StreamExt};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::SignalCache;
use crate::metrics::Metrics;
use crate::models::signal::Side;
use crate::services::market_data::{CandleSource, MarketDataError};
use crate::signals::engine::SignalEngine;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// Terminal state of one pair within a pass.
#[derive(Debug, Clone)]
pub enum PairOutcome {
    /// A signal was computed and written to the cache
    Scored(Side),
    /// No data this pass; the cached entry was left untouched
    Failed(MarketDataError),
}

#[derive(Debug, Clone)]
pub struct PairResult {
    pub symbol: String,
    pub timeframe: String,
    pub outcome: PairOutcome,
}

#[derive(Debug, Clone)]
pub struct PassReport {
    /// Results in configuration order
    pub results: Vec<PairResult>,
    pub duration: Duration,
}

impl PassReport {
    pub fn scored(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PairOutcome::Scored(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.scored()
    }
}

/// Runs scan passes over a fixed list of (symbol, timeframe) pairs.
///
/// At most one pass runs at a time; a pass requested while another is in
/// progress is skipped. Inside a pass, up to `concurrency` pairs are fetched
/// and scored at once. Each pair writes only its own cache key.
pub struct PairScanner {
    source: Arc<dyn CandleSource>,
    cache: SignalCache,
    metrics: Option<Arc<Metrics>>,
    pairs: Vec<(String, String)>,
    concurrency: usize,
    fetch_timeout: Duration,
    pass_guard: Mutex<()>,
}

impl PairScanner {
    pub fn new(
        source: Arc<dyn CandleSource>,
        cache: SignalCache,
        pairs: Vec<(String, String)>,
    ) -> Self {
        Self {
            source,
            cache,
            metrics: None,
            pairs,
            concurrency: 1,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            pass_guard: Mutex::new(()),
        }
    }

    /// Set the worker pool size (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn cache(&self) -> &SignalCache {
        &self.cache
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Run one full pass. Returns `None` if another pass is still running.
    pub async fn run_pass(&self) -> Option<PassReport> {
        let Ok(_guard) = self.pass_guard.try_lock() else {
            warn!("PairScanner: previous pass still running, skipping");
            if let Some(ref metrics) = self.metrics {
                metrics.scan_passes_skipped_total.inc();
            }
            return None;
        };

        let start = Instant::now();
        info!(
            pairs = self.pairs.len(),
            concurrency = self.concurrency,
            "PairScanner: scan pass starting for {} pairs",
            self.pairs.len()
        );

        let mut indexed: Vec<(usize, PairResult)> =
            stream::iter(self.pairs.clone().into_iter().enumerate())
                .map(|(idx, (symbol, timeframe))| async move {
                    (idx, self.scan_pair(&symbol, &timeframe).await)
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;
        indexed.sort_by_key(|(idx, _)| *idx);

        let report = PassReport {
            results: indexed.into_iter().map(|(_, result)| result).collect(),
            duration: start.elapsed(),
        };

        if let Some(ref metrics) = self.metrics {
            metrics.scan_passes_total.inc();
            metrics
                .scan_pass_duration_seconds
                .observe(report.duration.as_secs_f64());
            metrics.cached_signals.set(self.cache.len().await as i64);
        }

        info!(
            scored = report.scored(),
            failed = report.failed(),
            duration_ms = report.duration.as_millis() as u64,
            "PairScanner: scan pass finished ({} scored, {} failed)",
            report.scored(),
            report.failed()
        );

        Some(report)
    }

    /// Fetch, score and cache a single pair. Failures never touch the cache.
    pub async fn scan_pair(&self, symbol: &str, timeframe: &str) -> PairResult {
        let fetched = tokio::time::timeout(
            self.fetch_timeout,
            self.source.fetch_candles(symbol, timeframe),
        )
        .await
        .unwrap_or(Err(MarketDataError::Timeout));

        let outcome = match fetched {
            Ok(series) => {
                let (signal, snapshot) =
                    SignalEngine::evaluate_with_indicators(symbol, timeframe, &series);

                if let Some(ref snapshot) = snapshot {
                    debug!(
                        symbol = %symbol,
                        timeframe = %timeframe,
                        indicators = ?snapshot,
                        "PairScanner: indicators for {} [{}]",
                        symbol,
                        timeframe
                    );
                }

                let side = signal.side;
                if signal.is_directional() {
                    info!(
                        symbol = %symbol,
                        timeframe = %timeframe,
                        side = %side,
                        entry = signal.entry,
                        tp = ?signal.tp,
                        sl = ?signal.sl,
                        "PairScanner: {} [{}] -> {} @ {:.4}",
                        symbol,
                        timeframe,
                        side,
                        signal.entry
                    );
                } else {
                    debug!(
                        symbol = %symbol,
                        timeframe = %timeframe,
                        reason = %signal.reason,
                        "PairScanner: {} [{}] -> FLAT",
                        symbol,
                        timeframe
                    );
                }

                self.cache.insert(signal).await;
                if let Some(ref metrics) = self.metrics {
                    metrics.record_scored(side);
                }
                PairOutcome::Scored(side)
            }
            Err(e) => {
                warn!(
                    symbol = %symbol,
                    timeframe = %timeframe,
                    error = %e,
                    status_code = ?e.status_code(),
                    "PairScanner: data unavailable for {} [{}]: {}",
                    symbol,
                    timeframe,
                    e
                );
                if let Some(ref metrics) = self.metrics {
                    metrics.record_failed();
                }
                PairOutcome::Failed(e)
            }
        };

        PairResult {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            outcome,
        }
    }
}
