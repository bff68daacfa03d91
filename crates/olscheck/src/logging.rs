//! Tracing setup for olscheck
//!
//! Logs go to stderr so stdout only carries the operator-facing lines.
//! RUST_LOG wins over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
