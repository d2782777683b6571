//! Bybit v5 REST payloads

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineResponse {
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    #[serde(default)]
    pub result: Option<KlineResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KlineResult {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `[startTime, open, high, low, close, volume, turnover]`, newest first
    #[serde(default)]
    pub list: Vec<Vec<String>>,
}

/// One parsed kline row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KlineRow {
    pub start_time: i64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl KlineRow {
    pub fn parse(row: &[String]) -> Result<Self, String> {
        if row.len() < 5 {
            return Err(format!("kline row has {} fields, expected at least 5", row.len()));
        }

        let start_time = row[0]
            .parse::<i64>()
            .map_err(|e| format!("invalid start time '{}': {}", row[0], e))?;
        let high = parse_price(&row[2], "high")?;
        let low = parse_price(&row[3], "low")?;
        let close = parse_price(&row[4], "close")?;

        Ok(Self {
            start_time,
            high,
            low,
            close,
        })
    }
}

fn parse_price(raw: &str, field: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|e| format!("invalid {} price '{}': {}", field, raw, e))
}
