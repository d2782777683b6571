//! Candle fixtures shared by unit and integration tests
#![allow(dead_code)]

use ictscan::models::candles::CandleSeries;

/// Zigzag uptrend (150 candles) followed by a 16 candle pullback that ends
/// inside the discount OTE band of the last 30 closes. RSI ends near 49.
///
/// Last close 170.5, swing 168.5..175.0, band ~169.87..170.98.
pub fn bullish_pullback_closes() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..150)
        .map(|i| 100.0 + 0.5 * i as f64 + if i % 2 == 0 { 1.0 } else { 0.0 })
        .collect();

    let mut last = *closes.last().unwrap();
    for j in 0..16 {
        last += if j % 2 == 0 { -1.0 } else { 0.5 };
        closes.push(last);
    }
    closes
}

/// Mirror image of [`bullish_pullback_closes`]: downtrend with a rally into
/// the premium OTE band. Last close 229.5, RSI ends near 51.
pub fn bearish_rally_closes() -> Vec<f64> {
    bullish_pullback_closes()
        .into_iter()
        .map(|c| 400.0 - c)
        .collect()
}

/// Steady zigzag uptrend with no pullback; RSI sits above 70.
pub fn extended_uptrend_closes() -> Vec<f64> {
    bullish_pullback_closes().into_iter().take(150).collect()
}

/// Series with every candle one unit tall (high = close + 0.5, low = close - 0.5).
pub fn series(closes: Vec<f64>) -> CandleSeries {
    CandleSeries::from_closes(closes, 0.5)
}

pub fn bullish_series() -> CandleSeries {
    series(bullish_pullback_closes())
}

pub fn bearish_series() -> CandleSeries {
    series(bearish_rally_closes())
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
