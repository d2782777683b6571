//! Market scenario tests for the rule set

use crate::fixtures::{
    assert_close, bearish_series, bullish_series, extended_uptrend_closes, series,
};
use ictscan::models::signal::{Side, SignalReason};
use ictscan::signals::engine::SignalEngine;

#[test]
fn test_bullish_pullback_into_discount_ote_is_long() {
    let signal = SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series());

    assert_eq!(signal.side, Side::Long);
    let tp = signal.tp.unwrap();
    let sl = signal.sl.unwrap();
    assert!(tp > signal.entry && signal.entry > sl);

    // avg range is exactly 1.0 for the fixture
    assert_close(signal.entry, 170.5);
    assert_close(tp, 173.0);
    assert_close(sl, 169.3);
    assert!(matches!(signal.reason, SignalReason::BullishDiscountOte { .. }));
}

#[test]
fn test_bearish_rally_into_premium_ote_is_short() {
    let signal = SignalEngine::evaluate("BTCUSDT", "1h", &bearish_series());

    assert_eq!(signal.side, Side::Short);
    let tp = signal.tp.unwrap();
    let sl = signal.sl.unwrap();
    assert!(sl > signal.entry && signal.entry > tp);

    assert_close(signal.entry, 229.5);
    assert_close(tp, 227.0);
    assert_close(sl, 230.7);
    assert!(matches!(signal.reason, SignalReason::BearishPremiumOte { .. }));
}

#[test]
fn test_extended_uptrend_without_pullback_is_flat() {
    // Price sits in premium and RSI is above 70
    let signal = SignalEngine::evaluate("BTCUSDT", "1h", &series(extended_uptrend_closes()));
    assert_eq!(signal.side, Side::Flat);
    assert_eq!(signal.reason, SignalReason::NoSetup);
    assert!(signal.tp.is_none() && signal.sl.is_none());
}

#[test]
fn test_bullish_setup_rejected_when_bias_flips() {
    // Same shape, but the bearish mirror has the opposite bias, so the
    // long rule never applies to it
    let signal = SignalEngine::evaluate("BTCUSDT", "1h", &bearish_series());
    assert_ne!(signal.side, Side::Long);
}

#[test]
fn test_reason_reports_rsi() {
    let signal = SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series());
    match signal.reason {
        SignalReason::BullishDiscountOte { rsi } => assert!(rsi > 40.0 && rsi < 70.0),
        other => panic!("unexpected reason {:?}", other),
    }
}

#[test]
fn test_identical_inputs_give_identical_signals() {
    let first = SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series());
    let second = SignalEngine::evaluate("BTCUSDT", "1h", &bullish_series());
    assert!(first.same_setup(&second));
}
