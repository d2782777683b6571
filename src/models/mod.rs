//! Shared data models spanning the engine layers.

pub mod candles;
pub mod indicators;
pub mod signal;

pub use candles::{CandleSeries, SeriesError};
pub use indicators::{IndicatorSnapshot, OteBand};
pub use signal::{Side, Signal, SignalReason};
