//! Task trait and registry
//!
//! This module defines the contract for bridge tasks and the registry that
//! dispatches invocations by task name.
//!
//! # Task Contract
//!
//! All tasks must:
//! 1. Implement the [`Task`] trait (async)
//! 2. Accept an optional JSON argument and forward it without validation
//!    beyond what their own operation structurally requires
//! 3. Resolve to a JSON value (usually `null`) or fail with a [`TaskError`]
//!
//! Each invocation is independent and stateless; the registry enforces no
//! ordering between concurrent invocations, supports no cancellation once a
//! handler starts, and applies no timeout of its own. Callers that need a
//! clean slate sequence `clear:db` before `seed:db` themselves, and the
//! external runner owns any timeout around an invocation.
//!
//! # Example
//!
//! ```no_run
//! use seedbridge_runner::registry::{Task, TaskError, TaskRegistry};
//! use async_trait::async_trait;
//! use serde_json::Value as JsonValue;
//! use std::sync::Arc;
//!
//! struct PingTask;
//!
//! #[async_trait]
//! impl Task for PingTask {
//!     fn name(&self) -> &str {
//!         "ping"
//!     }
//!
//!     async fn run(&self, _arg: Option<JsonValue>) -> Result<JsonValue, TaskError> {
//!         Ok(JsonValue::Null)
//!     }
//! }
//!
//! # async fn example() -> Result<(), TaskError> {
//! let mut registry = TaskRegistry::new();
//! registry.register(Arc::new(PingTask));
//!
//! let result = registry.dispatch("ping", None).await?;
//! assert!(result.is_null());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use seedbridge_shared::db::DbError;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Task invocation error
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task is registered under the requested name
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// The argument cannot be forwarded in the shape the task requires
    #[error("invalid task argument: {0}")]
    InvalidArgument(String),

    /// Database operation failed
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Task result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// A named, single-shot task exposed to the external test runner
#[async_trait]
pub trait Task: Send + Sync {
    /// Returns the task name the runner invokes this task under
    ///
    /// Used for registry lookup and logging.
    fn name(&self) -> &str;

    /// Runs one invocation to completion
    ///
    /// The argument is whatever the runner sent, forwarded verbatim; tasks
    /// that take no argument ignore it. Once started, a task runs to
    /// completion or failure; there is no cancellation.
    async fn run(&self, arg: Option<JsonValue>) -> TaskResult<JsonValue>;
}

/// Registry mapping task names to handlers
///
/// The bridge holds exactly one registry, built at startup; it keeps no
/// other state between invocations.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Arc<dyn Task>>,
}

impl TaskRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        TaskRegistry {
            tasks: HashMap::new(),
        }
    }

    /// Registers a task under its own name
    ///
    /// Registering a second task with the same name replaces the first.
    pub fn register(&mut self, task: Arc<dyn Task>) {
        tracing::debug!(task = task.name(), "registered task");
        self.tasks.insert(task.name().to_string(), task);
    }

    /// Dispatches one invocation to the task registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::UnknownTask`] if no task is registered under
    /// `name`; otherwise whatever the task itself returns.
    pub async fn dispatch(&self, name: &str, arg: Option<JsonValue>) -> TaskResult<JsonValue> {
        let task = self
            .tasks
            .get(name)
            .ok_or_else(|| TaskError::UnknownTask(name.to_string()))?;

        task.run(arg).await
    }

    /// Returns the registered task names, sorted
    pub fn task_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
