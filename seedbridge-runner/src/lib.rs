//! # Seedbridge Runner Library
//!
//! This library provides the task bridge an external end-to-end test runner
//! drives to reset and seed the application database between tests.
//!
//! ## Modules
//!
//! - `registry`: Task trait and name-to-handler registry
//! - `tasks`: The built-in `clear:db` and `seed:db` tasks
//! - `channel`: Newline-delimited JSON invocation channel
//! - `config`: Environment-based process configuration
//! - `telemetry`: Logging setup
//!
//! ## Example
//!
//! ```no_run
//! use seedbridge_runner::registry::TaskRegistry;
//! use seedbridge_runner::tasks;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = TaskRegistry::new();
//! tasks::register_builtin(&mut registry, "mongodb://localhost:27017/app_test");
//!
//! let result = registry.dispatch("clear:db", None).await?;
//! assert!(result.is_null());
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod config;
pub mod registry;
pub mod tasks;
pub mod telemetry;
