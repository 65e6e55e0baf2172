//! The `clear:db` task
//!
//! Connects, deletes every document from every collection in the target
//! database, and lets the connection drop. Collections and indexes stay in
//! place. Takes no argument; resolves to `null`.

use crate::registry::{Task, TaskResult};
use async_trait::async_trait;
use seedbridge_shared::db::DatabaseManager;
use serde_json::Value as JsonValue;

/// Name the external runner invokes this task under
pub const CLEAR_DB: &str = "clear:db";

/// Task that wipes all data from the target database
pub struct ClearDb {
    url: String,
}

impl ClearDb {
    /// Creates the task bound to a connection URL
    pub fn new(url: impl Into<String>) -> Self {
        ClearDb { url: url.into() }
    }
}

#[async_trait]
impl Task for ClearDb {
    fn name(&self) -> &str {
        CLEAR_DB
    }

    async fn run(&self, _arg: Option<JsonValue>) -> TaskResult<JsonValue> {
        // Fresh connection per invocation; dropped when this call returns.
        let manager = DatabaseManager::connect(&self.url).await?;
        manager.clear().await?;

        Ok(JsonValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TaskError;
    use seedbridge_shared::db::DbError;

    #[test]
    fn test_task_name() {
        assert_eq!(ClearDb::new("mongodb://localhost/db").name(), "clear:db");
    }

    #[tokio::test]
    async fn test_run_fails_rather_than_resolving_null_when_unreachable() {
        let task = ClearDb::new(
            "mongodb://127.0.0.1:9/x?serverSelectionTimeoutMS=1000&connectTimeoutMS=1000",
        );

        let err = task.run(None).await.unwrap_err();
        assert!(matches!(err, TaskError::Db(DbError::Connection { .. })));
    }
}
