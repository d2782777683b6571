//! Main signal evaluation engine: EMA bias + premium/discount + OTE + RSI filter.

use chrono::Utc;

use crate::indicators::{avg_range, ema, rsi};
use crate::models::candles::CandleSeries;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Side, Signal, SignalReason};
use crate::signals::zones::{Bias, SwingRange};

pub const MIN_CANDLES: usize = 80;

pub const EMA_FAST: usize = 20;
pub const EMA_SLOW: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const RANGE_PERIOD: usize = 20;
pub const SWING_WINDOW: usize = 30;

/// Range used when the candles have no measurable spread, as a share of price.
pub const FALLBACK_RANGE_PCT: f64 = 0.01;

pub const TP_RANGE_MULT: f64 = 2.5;
pub const SL_RANGE_MULT: f64 = 1.2;

/// Exclusive RSI window accepted for longs.
pub const LONG_RSI_BOUNDS: (f64, f64) = (40.0, 70.0);
/// Exclusive RSI window accepted for shorts.
pub const SHORT_RSI_BOUNDS: (f64, f64) = (30.0, 60.0);

pub struct SignalEngine;

impl SignalEngine {
    /// Classify the latest candle of `series` into LONG / SHORT / FLAT.
    ///
    /// Deterministic in its inputs apart from the timestamp.
    pub fn evaluate(symbol: &str, timeframe: &str, series: &CandleSeries) -> Signal {
        Self::evaluate_with_indicators(symbol, timeframe, series).0
    }

    /// Evaluate and also return the indicator values behind the decision.
    /// The snapshot is `None` when the history was too short to compute it.
    pub fn evaluate_with_indicators(
        symbol: &str,
        timeframe: &str,
        series: &CandleSeries,
    ) -> (Signal, Option<IndicatorSnapshot>) {
        let snapshot = if series.len() >= MIN_CANDLES {
            Self::snapshot(series)
        } else {
            None
        };
        let Some(snapshot) = snapshot else {
            let reason = SignalReason::InsufficientHistory {
                candles: series.len(),
                required: MIN_CANDLES,
            };
            let entry = series.last_close().unwrap_or(0.0);
            return (Signal::flat(symbol, timeframe, entry, reason), None);
        };

        let signal = Self::classify(symbol, timeframe, &snapshot);
        (signal, Some(snapshot))
    }

    fn snapshot(series: &CandleSeries) -> Option<IndicatorSnapshot> {
        let closes = series.closes();
        let price = series.last_close()?;

        let ema_fast = *ema(closes, EMA_FAST).last()?;
        let ema_slow = *ema(closes, EMA_SLOW).last()?;
        let rsi_now = rsi(closes, RSI_PERIOD).last().copied().flatten();

        let swing = SwingRange::from_closes(closes, SWING_WINDOW)?;

        let mut range = avg_range(series.highs(), series.lows(), RANGE_PERIOD);
        if range == 0.0 || range.is_nan() {
            range = price * FALLBACK_RANGE_PCT;
        }

        let bias = Bias::from_emas(ema_fast, ema_slow);

        Some(IndicatorSnapshot {
            price,
            ema_fast,
            ema_slow,
            rsi: rsi_now,
            swing_high: swing.high,
            swing_low: swing.low,
            mid: swing.mid(),
            avg_range: range,
            ote: swing.ote_band(bias),
        })
    }

    fn classify(symbol: &str, timeframe: &str, s: &IndicatorSnapshot) -> Signal {
        let bias = Bias::from_emas(s.ema_fast, s.ema_slow);
        let price = s.price;
        let in_ote = s.ote.is_some_and(|band| band.contains(price));

        let setup = match (bias, s.rsi) {
            (Bias::Bullish, Some(rsi))
                if price < s.mid && within(rsi, LONG_RSI_BOUNDS) && in_ote =>
            {
                Some((
                    Side::Long,
                    price + s.avg_range * TP_RANGE_MULT,
                    price - s.avg_range * SL_RANGE_MULT,
                    SignalReason::BullishDiscountOte { rsi },
                ))
            }
            (Bias::Bearish, Some(rsi))
                if price > s.mid && within(rsi, SHORT_RSI_BOUNDS) && in_ote =>
            {
                Some((
                    Side::Short,
                    price - s.avg_range * TP_RANGE_MULT,
                    price + s.avg_range * SL_RANGE_MULT,
                    SignalReason::BearishPremiumOte { rsi },
                ))
            }
            _ => None,
        };

        match setup {
            Some((side, tp, sl, reason)) => Signal {
                symbol: symbol.to_string(),
                timeframe: timeframe.to_string(),
                side,
                entry: price,
                tp: Some(tp),
                sl: Some(sl),
                reason,
                timestamp: Utc::now(),
            },
            None => Signal::flat(symbol, timeframe, price, SignalReason::NoSetup),
        }
    }
}

fn within(value: f64, (lower, upper): (f64, f64)) -> bool {
    value > lower && value < upper
}
