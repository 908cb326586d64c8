use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
