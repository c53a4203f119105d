use tracing_subscriber::EnvFilter;

/// Install the overlay's console subscriber.
///
/// Debug builds log menu edits and effect triggers at `debug` (cooldown
/// drops and FPS windows at `trace` via `RUST_LOG`). Release builds only
/// report window lifecycle and startup at `info`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
