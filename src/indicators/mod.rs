//! Pure numeric indicators over oldest-first price slices.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::*;
pub use trend::*;
pub use volatility::*;

/// Indicator output aligned index-for-index with its source series.
/// `None` marks warm-up positions where the value is not defined yet.
pub type IndicatorSeries = Vec<Option<f64>>;
