//! Fixed-interval driver for scan passes

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::cache::SignalCache;
use crate::core::scanner::PairScanner;

/// Scheduler that periodically runs a scan pass over every configured pair
pub struct ScanScheduler {
    scanner: Arc<PairScanner>,
    interval: Duration,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `scanner` - Pass coordinator owning the pairs and the signal cache
    /// * `interval` - Time between pass starts (must be > 0)
    pub fn new(
        scanner: Arc<PairScanner>,
        interval: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval.is_zero() {
            return Err("Scheduler disabled: scan interval is 0".into());
        }

        info!(
            interval_secs = interval.as_secs_f64(),
            pairs = scanner.pairs().len(),
            "ScanScheduler: created with interval {:?}",
            interval
        );

        Ok(Self {
            scanner,
            interval,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Handle onto the cache the scheduler writes to
    pub fn cache(&self) -> SignalCache {
        self.scanner.cache().clone()
    }

    /// Start the periodic driver. The first pass runs immediately.
    ///
    /// Passes run one after another inside the driver task, so a slow pass
    /// delays the next tick instead of overlapping it. A panicking pass is
    /// logged and the driver keeps ticking.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut guard = self.handle.write().await;
        if guard.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err("ScanScheduler: already running".into());
        }

        let scanner = self.scanner.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("ScanScheduler: started");

            loop {
                ticker.tick().await;

                match AssertUnwindSafe(scanner.run_pass()).catch_unwind().await {
                    Ok(Some(report)) => {
                        debug!(
                            scored = report.scored(),
                            failed = report.failed(),
                            "ScanScheduler: pass complete"
                        );
                    }
                    Ok(None) => {
                        debug!("ScanScheduler: pass skipped, another pass in progress");
                    }
                    Err(payload) => {
                        let message = payload
                            .downcast_ref::<&str>()
                            .map(|s| s.to_string())
                            .or_else(|| payload.downcast_ref::<String>().cloned())
                            .unwrap_or_else(|| "unknown panic".to_string());
                        error!(panic = %message, "ScanScheduler: scan pass aborted");
                    }
                }
            }
        });

        *guard = Some(handle);
        info!("ScanScheduler: started successfully");
        Ok(())
    }

    /// Stop the scheduler. A pass in progress is cancelled; once this
    /// returns nothing more is written to the cache.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            // Wait until the driver, and the pass it owns, has been dropped
            let _ = h.await;
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
