//! Tracing setup: structured logging with span definitions.
//!
//! Every initializer uses `try_init`, so calling one after a global
//! subscriber exists returns `false` instead of panicking.

pub mod spans;

use braid_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "BRAID_LOG";

/// Install a JSON subscriber filtered by `BRAID_LOG`, defaulting to `info`.
pub fn init_tracing() -> bool {
    install(env_filter_or("info"), true)
}

/// Install a JSON subscriber with an explicit filter, ignoring `BRAID_LOG`.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

/// Install a subscriber from config. `BRAID_LOG` still wins over `log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    install(
        env_filter_or(&config.log_level.to_ascii_lowercase()),
        config.json_logs,
    )
}

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
