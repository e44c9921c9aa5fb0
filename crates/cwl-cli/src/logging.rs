use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// Output goes to stderr; stdout carries the report and must stay clean.
/// `RUST_LOG` wins when set, otherwise the level is `warn`, or `debug`
/// with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
