use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Long,
    Short,
    Flat,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "LONG",
            Side::Short => "SHORT",
            Side::Flat => "FLAT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a signal came out the way it did.
///
/// Kept structured so results compare by value; text is only produced when
/// a signal is rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum SignalReason {
    InsufficientHistory { candles: usize, required: usize },
    NoSetup,
    BullishDiscountOte { rsi: f64 },
    BearishPremiumOte { rsi: f64 },
}

impl fmt::Display for SignalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalReason::InsufficientHistory { candles, required } => {
                write!(f, "Insufficient history ({}/{} candles)", candles, required)
            }
            SignalReason::NoSetup => f.write_str("No setup"),
            SignalReason::BullishDiscountOte { rsi } => {
                write!(f, "Bullish bias, discount OTE, RSI {:.1}", rsi)
            }
            SignalReason::BearishPremiumOte { rsi } => {
                write!(f, "Bearish bias, premium OTE, RSI {:.1}", rsi)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub timeframe: String,
    pub side: Side,
    pub entry: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl: Option<f64>,
    pub reason: SignalReason,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn flat(symbol: &str, timeframe: &str, entry: f64, reason: SignalReason) -> Self {
        Self {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            side: Side::Flat,
            entry,
            tp: None,
            sl: None,
            reason,
            timestamp: Utc::now(),
        }
    }

    pub fn is_directional(&self) -> bool {
        self.side != Side::Flat
    }

    /// Field-by-field equality ignoring the creation timestamp.
    pub fn same_setup(&self, other: &Signal) -> bool {
        self.symbol == other.symbol
            && self.timeframe == other.timeframe
            && self.side == other.side
            && self.entry == other.entry
            && self.tp == other.tp
            && self.sl == other.sl
            && self.reason == other.reason
    }
}
