//! Logging initialization

/// Initialize logging based on debug flag
///
/// Diagnostics go to stderr so table output keeps stdout to itself.
pub fn init_logging(debug: bool) {
    if !debug {
        // No logging by default (silent operation)
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();
}
