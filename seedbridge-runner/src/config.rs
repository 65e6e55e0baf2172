//! Configuration management for the bridge runner
//!
//! This module loads configuration from environment variables and provides
//! a type-safe configuration struct.
//!
//! # Environment Variables
//!
//! - `MONGODB_URL`: Connection URL naming the target database (required),
//!   e.g. `mongodb://localhost:27017/app_test`
//! - `SEEDBRIDGE_LOG`: Tracing filter directive (default:
//!   `seedbridge_shared=info,seedbridge_runner=info`)
//! - `SEEDBRIDGE_LOG_JSON`: Emit logs as JSON lines when `1` or `true`
//!   (default: false)
//!
//! # Example
//!
//! ```no_run
//! use seedbridge_runner::config::Config;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! println!("Bridging tasks to {}", config.database.url);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter when `SEEDBRIDGE_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "seedbridge_shared=info,seedbridge_runner=info";

/// Complete runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Logging configuration
    pub log: LogConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL; its path names the database the tasks operate on
    pub url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `MONGODB_URL` is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let url = env::var("MONGODB_URL")
            .map_err(|_| anyhow::anyhow!("MONGODB_URL environment variable is required"))?;

        let filter =
            env::var("SEEDBRIDGE_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let json = env::var("SEEDBRIDGE_LOG_JSON")
            .map(|value| parse_bool(&value))
            .unwrap_or(false);

        Ok(Config {
            database: DatabaseConfig { url },
            log: LogConfig { filter, json },
        })
    }
}

fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool(" true "));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_default_filter_covers_both_crates() {
        assert!(DEFAULT_LOG_FILTER.contains("seedbridge_runner"));
        assert!(DEFAULT_LOG_FILTER.contains("seedbridge_shared"));
    }
}
