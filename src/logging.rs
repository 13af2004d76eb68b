use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber. Safe to call more than once.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init: a subscriber may already be set (e.g., tests).
        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    });
}
