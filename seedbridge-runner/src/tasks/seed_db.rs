//! The `seed:db` task
//!
//! Connects, inserts exactly one user document into the `users` collection,
//! and lets the connection drop. The argument is forwarded verbatim, so
//! partial user documents are accepted and no field is defaulted or dropped.
//!
//! Resolves to `null` on success. The generated `_id` is logged at debug
//! level rather than echoed; callers that need the persisted document query
//! the collection for it.

use crate::registry::{Task, TaskError, TaskResult};
use async_trait::async_trait;
use mongodb::bson;
use seedbridge_shared::db::DatabaseManager;
use serde_json::Value as JsonValue;

/// Name the external runner invokes this task under
pub const SEED_DB: &str = "seed:db";

/// Task that inserts one user document into the target database
pub struct SeedDb {
    url: String,
}

impl SeedDb {
    /// Creates the task bound to a connection URL
    pub fn new(url: impl Into<String>) -> Self {
        SeedDb { url: url.into() }
    }
}

#[async_trait]
impl Task for SeedDb {
    fn name(&self) -> &str {
        SEED_DB
    }

    async fn run(&self, arg: Option<JsonValue>) -> TaskResult<JsonValue> {
        let arg = arg.ok_or_else(|| {
            TaskError::InvalidArgument("seed:db requires a user document".to_string())
        })?;

        // Pass-through: any JSON object becomes the stored document as-is.
        let document = bson::to_document(&arg).map_err(|err| {
            TaskError::InvalidArgument(format!("user document must be a JSON object: {err}"))
        })?;

        let manager = DatabaseManager::connect(&self.url).await?;
        let id = manager.populate_with_user(document).await?;
        tracing::debug!(id = %id, "seeded user");

        Ok(JsonValue::Null)
    }
}
