use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with environment-based filtering
///
/// - Uses environment variables for log level filtering (defaults to "info" if not set)
/// - Example: RUST_LOG=debug or RUST_LOG=connlog_core=debug
/// - Writes to stderr so stdout stays reserved for query output
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}
