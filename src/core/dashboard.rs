//! HTML rendering of the signal cache

use std::fmt::Write;

use crate::cache::SignalMap;
use crate::models::signal::Signal;

pub const PLACEHOLDER: &str = "No signal yet...";

/// Six-decimal price, or `-` when absent or zero.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format!("{:.6}", v),
        _ => "-".to_string(),
    }
}

/// Display text for a signal's reason. Directional setups carry the
/// timeframe prefix, e.g. `[1h] Bullish bias, discount OTE, RSI 55.0`.
pub fn reason_text(signal: &Signal) -> String {
    if signal.is_directional() {
        format!("[{}] {}", signal.timeframe, signal.reason)
    } else {
        signal.reason.to_string()
    }
}

/// Full dashboard page: one row per configured (symbol, timeframe).
pub fn render_dashboard(symbols: &[String], timeframes: &[String], signals: &SignalMap) -> String {
    let mut rows = String::new();

    for symbol in symbols {
        let by_tf = signals.get(symbol);
        for tf in timeframes {
            let sym = escape_html(symbol);
            let tf_cell = escape_html(tf);
            match by_tf.and_then(|m| m.get(tf)) {
                None => {
                    let _ = writeln!(
                        rows,
                        "<tr><td>{}</td><td>{}</td><td colspan=\"5\">{}</td></tr>",
                        sym, tf_cell, PLACEHOLDER
                    );
                }
                Some(signal) => {
                    let _ = writeln!(
                        rows,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        sym,
                        tf_cell,
                        signal.side,
                        format_price(Some(signal.entry)),
                        format_price(signal.tp),
                        format_price(signal.sl),
                        escape_html(&reason_text(signal))
                    );
                }
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>ICT Signal Scanner</title></head>\n<body>\n\
         <h1>ICT-Style Multi-Timeframe Signal Scanner (Bybit data)</h1>\n\
         <p><b>Mode:</b> signals only, no orders are placed (entry/TP/SL are informational)</p>\n\
         <p><b>Timeframes:</b> {}</p>\n\
         <p><b>Pairs:</b> {}</p>\n\
         <table border=\"1\" cellpadding=\"6\">\n\
         <tr><th>Pair</th><th>TF</th><th>Side</th><th>Entry</th><th>TP</th><th>SL</th><th>Reason</th></tr>\n\
         {}</table>\n</body>\n</html>\n",
        escape_html(&timeframes.join(", ")),
        escape_html(&symbols.join(", ")),
        rows
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
