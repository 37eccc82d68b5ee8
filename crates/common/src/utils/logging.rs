use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Default verbosity when `RUST_LOG` is unset. The HTTP-layer crates are
/// included so request spans from `tower_http` show up out of the box.
const DEFAULT_DIRECTIVES: &str = "info,tower_http=info,axum=info";

/// Install the process-wide tracing subscriber: compact single-line format on
/// stdout (container runtimes that hide stderr still capture logs), filtered
/// by `RUST_LOG` when present. Safe to call more than once; later calls are
/// no-ops (`try_init`).
pub fn init_logging_default() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = fmt()
        .compact()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .try_init();
}
