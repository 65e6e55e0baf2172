//! Logging setup
//!
//! Logging is configured through an explicitly constructed [`Telemetry`]
//! value built from the process [`Config`](crate::config::Config) and
//! installed exactly once at startup; no module touches global logger state
//! on its own.

use crate::config::LogConfig;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging settings: verbosity filter and output format
#[derive(Debug, Clone)]
pub struct Telemetry {
    /// Tracing filter directive
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Telemetry {
    /// Builds telemetry settings from the logging config
    pub fn new(log: &LogConfig) -> Self {
        Telemetry {
            filter: log.filter.clone(),
            json: log.json,
        }
    }

    /// Installs the global subscriber
    ///
    /// Call once at process start. Logs always go to stderr: stdout carries
    /// the task protocol.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directive does not parse.
    pub fn init(self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid log filter: {}", self.filter))?;

        let registry = tracing_subscriber::registry().with(filter);

        if self.json {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }

        Ok(())
    }
}
