//! Timeframe token -> Bybit kline interval code

/// Interval used for any token without an explicit mapping
pub const DEFAULT_INTERVAL: &str = "15";

/// Map a display timeframe (`"5m"`, `"1h"`, ...) to Bybit's interval code.
///
/// Unknown tokens fall back to the 15 minute interval.
pub fn to_bybit_interval(timeframe: &str) -> &'static str {
    match timeframe {
        "5m" => "5",
        "15m" => "15",
        "1h" => "60",
        "4h" => "240",
        "1d" | "1D" => "D",
        _ => DEFAULT_INTERVAL,
    }
}
