//! ICT-style multi-timeframe signal scanner.
//!
//! Pulls recent candles per (symbol, timeframe), derives EMA bias, RSI and
//! an OTE retracement band, classifies the market into LONG / SHORT / FLAT
//! and keeps the latest result per pair in an in-memory cache.

pub mod cache;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
