//! Logging initialization with environment-based formatters
//!
//! - Production: JSON lines for log aggregation
//! - Anything else: colored, human-readable output

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "info,ictscan=info";

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stdout);

    let registry = tracing_subscriber::registry().with(env_filter);

    if is_production(&get_environment()) {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.with_ansi(true)).init();
    }
}
