//! Bias, swing range and OTE band derivation

use crate::models::indicators::OteBand;

/// Shallow edge of the optimal trade entry retracement (61.8%)
pub const OTE_SHALLOW: f64 = 0.618;
/// Deep edge of the optimal trade entry retracement (79%)
pub const OTE_DEEP: f64 = 0.79;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl Bias {
    /// Fast EMA above slow is bullish, below is bearish, equal is neutral.
    pub fn from_emas(fast: f64, slow: f64) -> Self {
        if fast > slow {
            Bias::Bullish
        } else if fast < slow {
            Bias::Bearish
        } else {
            Bias::Neutral
        }
    }
}

/// High/low of the recent closes window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingRange {
    pub high: f64,
    pub low: f64,
}

impl SwingRange {
    /// Swing over the last `window` closes, `None` for an empty slice.
    pub fn from_closes(closes: &[f64], window: usize) -> Option<Self> {
        let start = closes.len().saturating_sub(window);
        let recent = &closes[start..];
        if recent.is_empty() {
            return None;
        }

        let (high, low) = recent
            .iter()
            .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), &c| {
                (hi.max(c), lo.min(c))
            });

        Some(Self { high, low })
    }

    pub fn diff(&self) -> f64 {
        self.high - self.low
    }

    /// Equilibrium: below is discount, above is premium.
    pub fn mid(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// OTE band for the given bias.
    ///
    /// Bullish: 61.8%-79% retracement down from the swing high (discount).
    /// Bearish: 61.8%-79% retracement up from the swing low (premium).
    /// Neutral bias has no band.
    ///
    /// The bullish band is measured down from the high, not up from the low:
    /// `low + fib * diff` would put it above mid, where the `price < mid`
    /// long rule can never hold. See DESIGN.md, "OTE orientation".
    pub fn ote_band(&self, bias: Bias) -> Option<OteBand> {
        let diff = self.diff();
        match bias {
            Bias::Bullish => Some(OteBand {
                low: self.high - diff * OTE_DEEP,
                high: self.high - diff * OTE_SHALLOW,
            }),
            Bias::Bearish => Some(OteBand {
                low: self.low + diff * OTE_SHALLOW,
                high: self.low + diff * OTE_DEEP,
            }),
            Bias::Neutral => None,
        }
    }
}
