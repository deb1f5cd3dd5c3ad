//! Structured audit logging using **tracing**.
//!
//! Decision lines (Keep/Remove, replacement diffs) go to stdout as plain
//! text; the tracing subscriber carries the structured audit trail on
//! stderr, so tool output stays pipeable.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime. It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=texprune=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
