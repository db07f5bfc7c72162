//! Diagnostic logging setup
//!
//! User-facing output is printed by the reporter. The `tracing` events emitted
//! alongside it (request URLs, token source, counts) are off unless `RUST_LOG`
//! asks for them:
//!
//! ```bash
//! RUST_LOG=issue_fanout=debug,fanout_github=debug issue-fanout --dry-run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "issue_fanout=warn,fanout_github=warn,reqwest=error";

/// Install the global subscriber, writing to stderr
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
