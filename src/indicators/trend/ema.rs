//! EMA (Exponential Moving Average) indicator

/// Calculate the EMA series for a specific period.
///
/// k = 2 / (period + 1). The first output is the raw first input (no SMA
/// seed), every later value is `v * k + prev * (1 - k)`. Output length always
/// equals input length.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        if i == 0 {
            out.push(value);
        } else {
            let prev = out[i - 1];
            out.push(value * k + prev * (1.0 - k));
        }
    }

    out
}

/// Latest EMA value, `None` for an empty series
pub fn latest_ema(values: &[f64], period: usize) -> Option<f64> {
    ema(values, period).last().copied()
}
