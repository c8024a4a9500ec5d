/*!
 * Tracing Setup
 * Structured log output for the binary using the tracing crate
 */

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing for the process.
///
/// Environment variables:
/// - RUST_LOG: set the log filter (default: info)
/// - QUEUESORT_LOG_JSON: enable JSON output (default: false)
///
/// The `tracing-log` bridge is active, so `log` records emitted by the
/// library modules land in the same subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("QUEUESORT_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true),
            )
            .init();
        info!("Tracing initialized with JSON output");
    } else {
        // Human-readable output for the terminal
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}
