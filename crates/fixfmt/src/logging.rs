//! `tracing` subscriber bootstrap.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable whose filter directive overrides the configured one.
pub const ENV_VAR: &str = "FIXFMT_LOG";

/// `FIXFMT_LOG` if set and valid, else `default`, else `warn`.
#[must_use]
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr fmt subscriber. Returns `false` if one was already set.
pub fn init(default: &str) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(default))
        .try_init()
        .is_ok()
}
