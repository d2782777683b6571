use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series length mismatch: closes={closes}, highs={highs}, lows={lows}")]
    LengthMismatch {
        closes: usize,
        highs: usize,
        lows: usize,
    },
}

/// Oldest-first close/high/low history for a single (symbol, timeframe).
///
/// The three sequences always have the same length. An empty series is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    closes: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
}

impl CandleSeries {
    pub fn new(closes: Vec<f64>, highs: Vec<f64>, lows: Vec<f64>) -> Result<Self, SeriesError> {
        if closes.len() != highs.len() || closes.len() != lows.len() {
            return Err(SeriesError::LengthMismatch {
                closes: closes.len(),
                highs: highs.len(),
                lows: lows.len(),
            });
        }

        Ok(Self { closes, highs, lows })
    }

    /// Build a series where every candle has the given close and a fixed
    /// high/low spread around it.
    pub fn from_closes(closes: Vec<f64>, half_spread: f64) -> Self {
        let highs = closes.iter().map(|c| c + half_spread).collect();
        let lows = closes.iter().map(|c| c - half_spread).collect();
        Self { closes, highs, lows }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
