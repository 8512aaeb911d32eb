//! Console logging for solver runs.
//!
//! Installs a `tracing` subscriber printing solver events. Verbosity follows
//! `RUST_LOG`; without it, info events of `swapforge_solver` are shown.

use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "swapforge_solver=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, that one stays in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = env_filter();
        let directives = filter.to_string();

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok();
        debug!(event = "console_initialized", filter = %directives, installed);
    });
}

/// Returns true once [`init`] has run.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
