//! Candle source interface used by the scanner.

use crate::models::candles::CandleSeries;
use async_trait::async_trait;
use thiserror::Error;

/// Most recent candles requested per fetch.
pub const CANDLE_LIMIT: usize = 200;

/// Data for a pair could not be obtained on this pass.
#[derive(Debug, Clone, Error)]
pub enum MarketDataError {
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("provider error code {code}: {message}")]
    Provider { code: i64, message: String },
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl MarketDataError {
    /// Provider-specific status code, when the failure carried one.
    pub fn status_code(&self) -> Option<i64> {
        match self {
            MarketDataError::Http { status } => Some(i64::from(*status)),
            MarketDataError::Provider { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Up to [`CANDLE_LIMIT`] most recent candles, oldest first.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<CandleSeries, MarketDataError>;
}
