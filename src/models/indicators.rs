use serde::{Deserialize, Serialize};

/// Fib retracement band a price must sit in before a setup is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OteBand {
    pub low: f64,
    pub high: f64,
}

impl OteBand {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}

/// Indicator values behind a single evaluation, kept for logs and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    pub swing_high: f64,
    pub swing_low: f64,
    pub mid: f64,
    pub avg_range: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ote: Option<OteBand>,
}
