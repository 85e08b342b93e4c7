use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes console logging for the cleanup tool.
///
/// Logs go to stderr so the report on stdout stays clean. Default log
/// level is "info", overridable with RUST_LOG:
/// - RUST_LOG=debug cli --recent 5 ./restarts
/// - RUST_LOG=retention=debug cli --recent 5 ./restarts
pub fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
