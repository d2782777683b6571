//! Bybit REST client implementing [`CandleSource`]

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::messages::{KlineResponse, KlineRow};
use super::timeframe::to_bybit_interval;
use crate::models::candles::CandleSeries;
use crate::services::market_data::{CandleSource, MarketDataError, CANDLE_LIMIT};

pub const DEFAULT_BASE_URL: &str = "https://api.bybit.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

const KLINE_PATH: &str = "/v5/market/kline";

/// Strip the `.P` perpetual marker used in chart tickers.
///
/// `BTCUSDT.P` -> `BTCUSDT`, and a bare base gets the quote appended
/// (`BTC.P` -> `BTCUSDT`).
pub fn normalize_symbol(symbol: &str) -> String {
    match symbol.strip_suffix(".P") {
        Some(base) if base.ends_with("USDT") => base.to_string(),
        Some(base) => format!("{}USDT", base),
        None => symbol.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct BybitClient {
    http: reqwest::Client,
    base_url: String,
}

impl BybitClient {
    /// Client with its own HTTP pool and a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MarketDataError::Transport(e.to_string()))?;

        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch raw kline rows, ordered oldest first.
    pub async fn fetch_klines(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<Vec<KlineRow>, MarketDataError> {
        let market_symbol = normalize_symbol(symbol);
        let interval = to_bybit_interval(timeframe);
        let limit = CANDLE_LIMIT.to_string();
        let url = format!("{}{}", self.base_url, KLINE_PATH);

        debug!(
            symbol = %market_symbol,
            interval = interval,
            "Bybit: requesting klines for {} ({})",
            market_symbol,
            interval
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("category", "linear"),
                ("symbol", market_symbol.as_str()),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http {
                status: status.as_u16(),
            });
        }

        let body: KlineResponse = response.json().await.map_err(map_reqwest_error)?;
        if body.ret_code != 0 {
            return Err(MarketDataError::Provider {
                code: body.ret_code,
                message: body.ret_msg,
            });
        }

        let mut rows = body
            .result
            .unwrap_or_default()
            .list
            .iter()
            .map(|row| KlineRow::parse(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(MarketDataError::Malformed)?;

        rows.sort_by_key(|row| row.start_time);
        Ok(rows)
    }
}

#[async_trait]
impl CandleSource for BybitClient {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<CandleSeries, MarketDataError> {
        let rows = self.fetch_klines(symbol, timeframe).await?;

        let closes = rows.iter().map(|r| r.close).collect();
        let highs = rows.iter().map(|r| r.high).collect();
        let lows = rows.iter().map(|r| r.low).collect();

        CandleSeries::new(closes, highs, lows)
            .map_err(|e| MarketDataError::Malformed(e.to_string()))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout
    } else if e.is_decode() {
        MarketDataError::Malformed(e.to_string())
    } else {
        MarketDataError::Transport(e.to_string())
    }
}
