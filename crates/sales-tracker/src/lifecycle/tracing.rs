//! Log output for the binary and for tests that want to see actor traffic.
//!
//! Levels come from `RUST_LOG`: `info` shows actor lifecycle and each committed
//! change, `debug` adds request payloads, `warn` shows refusals and compensation.

/// Installs a compact formatter filtered by `RUST_LOG`. Safe to call more than
/// once; later calls keep the first subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
