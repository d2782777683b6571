//! Unit tests for RSI indicator

use crate::fixtures::{assert_close, bullish_pullback_closes};
use ictscan::indicators::momentum::{latest_rsi, rsi, rsi_default};

#[test]
fn test_rsi_insufficient_data_is_empty() {
    assert!(rsi(&[1.0; 14], 14).is_empty());
    assert!(rsi(&[], 14).is_empty());
    assert!(rsi(&[1.0, 2.0, 3.0], 3).is_empty());
}

#[test]
fn test_rsi_length_and_warmup_padding() {
    let closes = bullish_pullback_closes();
    for period in [2, 5, 14, 30] {
        let out = rsi(&closes, period);
        assert_eq!(out.len(), closes.len());
        assert!(out[..period].iter().all(Option::is_none));
        assert!(out[period..].iter().all(Option::is_some));
    }
}

#[test]
fn test_rsi_zero_loss_uses_rs_of_100() {
    let closes: Vec<f64> = (0..15).map(|i| i as f64).collect();
    let value = latest_rsi(&closes, 14).unwrap();
    assert_close(value, 100.0 - 100.0 / 101.0);
    assert!(value < 100.0);
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let out = rsi(&[10.0, 9.0, 8.0, 7.0], 3);
    assert_eq!(out.len(), 4);
    assert_close(out[3].unwrap(), 0.0);
}

#[test]
fn test_rsi_wilder_smoothing() {
    // first value: avg gain 1, avg loss 0 -> 99.0099...
    // second: gain (1*2 + 0)/3, loss (0*2 + 1)/3 -> RS 2 -> 66.67
    let out = rsi(&[1.0, 2.0, 3.0, 4.0, 3.0], 3);
    assert_close(out[3].unwrap(), 100.0 - 100.0 / 101.0);
    assert_close(out[4].unwrap(), 100.0 - 100.0 / 3.0);
}

#[test]
fn test_rsi_reference_series() {
    let closes = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
        45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];
    let out = rsi_default(&closes);
    assert_eq!(out.len(), closes.len());
    assert!((out[14].unwrap() - 70.4641).abs() < 1e-3);
    assert!((out[19].unwrap() - 57.9150).abs() < 1e-3);
}

#[test]
fn test_rsi_zero_period_is_empty() {
    assert!(rsi(&[1.0, 2.0, 3.0], 0).is_empty());
}
