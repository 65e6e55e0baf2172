//! # Seedbridge Runner
//!
//! This is the task bridge an external end-to-end test runner drives to
//! reset and seed the application database between tests.
//!
//! ## Architecture
//!
//! The runner:
//! - Registers the built-in tasks (`clear:db`, `seed:db`) against the
//!   configured connection URL
//! - Reads one JSON task request per line on stdin
//! - Answers with one JSON response per line on stdout
//! - Logs to stderr (stdout belongs to the protocol)
//! - Exits on EOF or Ctrl-C
//!
//! ## Usage
//!
//! ```bash
//! MONGODB_URL=mongodb://localhost:27017/app_test cargo run -p seedbridge-runner
//! ```

use seedbridge_runner::config::Config;
use seedbridge_runner::registry::TaskRegistry;
use seedbridge_runner::telemetry::Telemetry;
use seedbridge_runner::{channel, tasks};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    Telemetry::new(&config.log).init()?;

    tracing::info!("seedbridge runner v{} starting", env!("CARGO_PKG_VERSION"));

    let mut registry = TaskRegistry::new();
    tasks::register_builtin(&mut registry, &config.database.url);
    tracing::info!(tasks = ?registry.task_names(), "task bridge ready");

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
                shutdown.cancel();
            }
        });
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    channel::serve(&registry, stdin, stdout, shutdown).await?;

    tracing::info!("seedbridge runner exiting");
    Ok(())
}
