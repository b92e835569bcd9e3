//! Diagnostics via `tracing`
//!
//! Events go to stderr so they never mix with menu output on stdout. The
//! filter is read from `EXPENSE_TRACKER_LOG` and defaults to warnings from
//! this crate only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber (only the first call has effect)
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
