//! RSI (Relative Strength Index) indicator

use crate::indicators::IndicatorSeries;

/// RS used when the average loss is exactly zero.
///
/// RSI therefore tops out at 100 - 100 / 101 (about 99.01) instead of 100.
/// The entry thresholds are calibrated against this value.
pub const ZERO_LOSS_RS: f64 = 100.0;

/// Calculate the RSI series with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
///
/// Returns an empty series when `values.len() <= period` (or `period == 0`).
/// Otherwise the result has the same length as `values`, with the first
/// `period` entries set to `None`.
pub fn rsi(values: &[f64], period: usize) -> IndicatorSeries {
    if period == 0 || values.len() <= period {
        return Vec::new();
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = values[i] - values[i - 1];
        if change >= 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let period_f = period as f64;
    let mut avg_gain = gains / period_f;
    let mut avg_loss = losses / period_f;

    let mut out: IndicatorSeries = vec![None; period];
    out.reserve(values.len() - period);
    out.push(Some(rsi_value(avg_gain, avg_loss)));

    for i in (period + 1)..values.len() {
        let change = values[i] - values[i - 1];
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        out.push(Some(rsi_value(avg_gain, avg_loss)));
    }

    out
}

/// Calculate RSI with default period (14)
pub fn rsi_default(values: &[f64]) -> IndicatorSeries {
    rsi(values, 14)
}

/// Latest defined RSI value
pub fn latest_rsi(values: &[f64], period: usize) -> Option<f64> {
    rsi(values, period).last().copied().flatten()
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = if avg_loss == 0.0 {
        ZERO_LOSS_RS
    } else {
        avg_gain / avg_loss
    };
    100.0 - 100.0 / (1.0 + rs)
}
