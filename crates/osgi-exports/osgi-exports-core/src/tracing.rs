//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::FilterConfig;

/// Install a global subscriber: `RUST_LOG` wins, otherwise the config's `log_filter`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: &FilterConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
