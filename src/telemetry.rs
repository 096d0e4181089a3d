//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter when set. Logs go to stderr so
//! command output on stdout stays clean. Production logs are JSON lines.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::RuntimeConfig;

pub type TelemetryError = Box<dyn std::error::Error + Send + Sync>;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(runtime: &RuntimeConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&runtime.log_level))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if runtime.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
