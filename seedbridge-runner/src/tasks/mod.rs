//! Built-in bridge tasks
//!
//! Two tasks are exposed to the external test runner:
//!
//! - **`clear:db`**: empty every collection in the target database
//! - **`seed:db`**: insert one user document
//!
//! Each task holds only the connection URL and opens a fresh connection per
//! invocation, so every test-setup call is independently retriable. Callers
//! sequence `clear:db` before `seed:db` when they need a clean slate; the
//! bridge does not coordinate concurrent invocations.

pub mod clear_db;
pub mod seed_db;

pub use clear_db::ClearDb;
pub use seed_db::SeedDb;

use crate::registry::TaskRegistry;
use std::sync::Arc;

/// Registers the built-in tasks against the given connection URL
pub fn register_builtin(registry: &mut TaskRegistry, url: &str) {
    registry.register(Arc::new(ClearDb::new(url)));
    registry.register(Arc::new(SeedDb::new(url)));
}
