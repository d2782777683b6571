//! Prometheus metrics for scan passes and the HTTP surface

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::signal::Side;

pub struct Metrics {
    registry: Registry,

    pub scan_passes_total: IntCounter,
    pub scan_passes_skipped_total: IntCounter,
    pub scan_pass_duration_seconds: Histogram,
    pub pair_scans_total: IntCounterVec,
    pub signals_total: IntCounterVec,
    pub cached_signals: IntGauge,

    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scan_passes_total =
            IntCounter::new("scan_passes_total", "Completed scan passes")?;
        let scan_passes_skipped_total = IntCounter::new(
            "scan_passes_skipped_total",
            "Scan passes skipped because another pass was still running",
        )?;
        let scan_pass_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("scan_pass_duration_seconds", "Duration of a full scan pass")
                .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
        )?;
        let pair_scans_total = IntCounterVec::new(
            Opts::new("pair_scans_total", "Per-pair scan results"),
            &["outcome"],
        )?;
        let signals_total = IntCounterVec::new(
            Opts::new("signals_total", "Signals written to the cache by side"),
            &["side"],
        )?;
        let cached_signals = IntGauge::new("cached_signals", "Entries in the signal cache")?;

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(scan_passes_total.clone()))?;
        registry.register(Box::new(scan_passes_skipped_total.clone()))?;
        registry.register(Box::new(scan_pass_duration_seconds.clone()))?;
        registry.register(Box::new(pair_scans_total.clone()))?;
        registry.register(Box::new(signals_total.clone()))?;
        registry.register(Box::new(cached_signals.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            scan_passes_total,
            scan_passes_skipped_total,
            scan_pass_duration_seconds,
            pair_scans_total,
            signals_total,
            cached_signals,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    pub fn record_scored(&self, side: Side) {
        self.pair_scans_total.with_label_values(&["scored"]).inc();
        self.signals_total.with_label_values(&[side.as_str()]).inc();
    }

    pub fn record_failed(&self) {
        self.pair_scans_total.with_label_values(&["failed"]).inc();
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
