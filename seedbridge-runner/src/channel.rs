//! Newline-delimited JSON invocation channel
//!
//! The external test runner owns the orchestration side of task invocation;
//! this module implements the handler side as a request/response loop over
//! a pair of byte streams (stdin/stdout in production, in-memory pipes in
//! tests).
//!
//! # Wire Format
//!
//! One JSON object per line in each direction:
//!
//! ```text
//! > {"task": "seed:db", "arg": {"name": "Alice", "email": "alice@example.com"}}
//! < {"ok": null}
//! > {"task": "clear:db"}
//! < {"ok": null}
//! > {"task": "drop:db"}
//! < {"error": "unknown task: drop:db"}
//! ```
//!
//! A task failure answers with an `error` line rather than crashing the
//! process, so one broken setup step fails only the test that depends on
//! it. Blank input lines are skipped; EOF or cancellation ends the loop.

use crate::registry::TaskRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Channel error
#[derive(Debug, Error)]
pub enum ChannelError {
    /// I/O failure on the wire
    #[error("I/O error on task channel: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be encoded
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One task invocation from the external runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Registered task name
    pub task: String,

    /// Optional argument, forwarded verbatim to the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<JsonValue>,
}

/// One response line, either a definite value or an error message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskResponse {
    /// The task resolved; `null` for the built-in tasks
    #[serde(rename = "ok")]
    Ok(JsonValue),

    /// The task (or request parsing) failed
    #[serde(rename = "error")]
    Error(String),
}

/// Serves task invocations until EOF, I/O failure, or cancellation
///
/// Reads one [`TaskRequest`] per line, dispatches it through `registry`,
/// and writes one [`TaskResponse`] per request, flushed immediately so the
/// runner never waits on a buffered reply.
///
/// # Errors
///
/// Returns [`ChannelError`] only for failures of the channel itself; task
/// failures are reported in-band as `error` responses.
pub async fn serve<R, W>(
    registry: &TaskRegistry,
    reader: R,
    mut writer: W,
    shutdown: CancellationToken,
) -> Result<(), ChannelError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                info!("channel shutting down");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            debug!("input closed, ending channel");
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<TaskRequest>(line) {
            Ok(request) => {
                debug!(task = %request.task, "dispatching task");
                match registry.dispatch(&request.task, request.arg).await {
                    Ok(value) => TaskResponse::Ok(value),
                    Err(err) => {
                        warn!(task = %request.task, error = %err, "task failed");
                        TaskResponse::Error(error_message(&err))
                    }
                }
            }
            Err(err) => TaskResponse::Error(format!("malformed task request: {err}")),
        };

        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        writer.write_all(&payload).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Flattens an error and its source chain into one diagnostic string
fn error_message(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
