//! Volatility indicators: average candle range

pub mod range;

pub use range::*;
