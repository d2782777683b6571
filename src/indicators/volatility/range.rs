//! Average candle range (mean of high - low)

/// Mean of `high - low` over the last `period` candles, or over every candle
/// when fewer than `period` exist. Returns 0 for empty input.
pub fn avg_range(highs: &[f64], lows: &[f64], period: usize) -> f64 {
    let len = highs.len().min(lows.len());
    let start = len.saturating_sub(period);

    let count = len - start;
    if count == 0 {
        return 0.0;
    }

    let sum: f64 = highs[start..len]
        .iter()
        .zip(&lows[start..len])
        .map(|(high, low)| high - low)
        .sum();

    sum / count as f64
}

/// Average range with default period (20)
pub fn avg_range_default(highs: &[f64], lows: &[f64]) -> f64 {
    avg_range(highs, lows, 20)
}
