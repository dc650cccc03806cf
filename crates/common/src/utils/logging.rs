use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with compact stdout output.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info`
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}

/// Initialize the tracing subscriber with JSON structured output, for
/// container deployments where logs are shipped to a collector.
pub fn init_logging_json() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(|| io::stdout())
        .try_init();
}
