//! Unit tests for EMA indicator

use crate::fixtures::{assert_close, bullish_pullback_closes};
use ictscan::indicators::trend::{ema, latest_ema};

#[test]
fn test_ema_seed_is_first_value() {
    for period in [1, 2, 14, 20, 50, 200] {
        let closes = bullish_pullback_closes();
        let out = ema(&closes, period);
        assert_eq!(out[0], closes[0], "period {}", period);
    }
}

#[test]
fn test_ema_output_length_matches_input() {
    let closes = bullish_pullback_closes();
    assert_eq!(ema(&closes, 20).len(), closes.len());
    assert_eq!(ema(&closes[..3], 50).len(), 3);
}

#[test]
fn test_ema_empty_input() {
    assert!(ema(&[], 20).is_empty());
    assert!(latest_ema(&[], 20).is_none());
}

#[test]
fn test_ema_known_values() {
    // k = 0.5 for period 3
    let out = ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    let expected = [1.0, 1.5, 2.25, 3.125, 4.0625];
    for (actual, expected) in out.iter().zip(expected) {
        assert_close(*actual, expected);
    }
}

#[test]
fn test_fast_ema_leads_slow_ema_in_uptrend() {
    let closes: Vec<f64> = (0..120).map(|i| 100.0 + i as f64).collect();
    let fast = latest_ema(&closes, 20).unwrap();
    let slow = latest_ema(&closes, 50).unwrap();
    assert!(fast > slow);
}
