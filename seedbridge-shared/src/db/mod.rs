//! Database layer for seedbridge
//!
//! This module provides the reset/seed operations an end-to-end test suite
//! runs between tests: wipe every collection in the target database, and
//! insert a single user document.
//!
//! # Modules
//!
//! - `manager`: Per-invocation connection handle with `clear` and
//!   `populate_with_user` operations
//!
//! # Example
//!
//! ```no_run
//! use seedbridge_shared::db::DatabaseManager;
//!
//! # async fn example() -> Result<(), seedbridge_shared::db::DbError> {
//! let manager = DatabaseManager::connect("mongodb://localhost:27017/app_test").await?;
//! manager.clear().await?;
//! # Ok(())
//! # }
//! ```

pub mod manager;

pub use manager::{DatabaseManager, DbError};
