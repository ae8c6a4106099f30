//! Logging initialization.
//!
//! - `json = true`: structured JSON lines for log aggregation
//! - otherwise: human-readable, colored output
//!
//! The filter comes from `RUST_LOG` and defaults to `info`. Logs go to stderr
//! so command output on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ports::config_port::ConfigPort;

/// Install the global subscriber. Returns `false` when one was already set.
pub fn init_logging(json: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "logging already initialised");
            false
        }
    }
}

pub fn init_from_config(config: &dyn ConfigPort) -> bool {
    init_logging(config.get_bool("log", "json", false))
}
