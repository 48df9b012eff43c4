//! Logging setup
//!
//! Logs go to stderr so stdout stays clean for reports and JSON.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Later calls are no-ops.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "reelgood_core=info,reelgood=info,warn"
    } else {
        "warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
