//! Bybit linear-perpetual kline data source

pub mod client;
pub mod messages;
pub mod timeframe;

pub use client::{normalize_symbol, BybitClient, DEFAULT_BASE_URL};
pub use timeframe::to_bybit_interval;
