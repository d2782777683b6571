//! External market data collaborators.

pub mod bybit;
pub mod market_data;

pub use bybit::BybitClient;
pub use market_data::{CandleSource, MarketDataError};
