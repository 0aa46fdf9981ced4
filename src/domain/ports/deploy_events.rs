//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! The use case never prints; sinks decide how events are shown.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::Stage;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        alias: String,
        host: String,
        destination: String,
        dry_run: bool,
    },

    /// A stage began
    StageStarted { stage: Stage },

    /// An external command is about to run
    CommandIssued { stage: Stage, command_line: String },

    /// Required tool resolved on PATH
    ToolFound { name: String, path: PathBuf },

    /// Required tool not found
    ToolMissing { name: String },

    /// Last notice before the destructive part of the run
    AboutToDeploy { host: String },

    /// A stage finished successfully
    StageCompleted { stage: Stage, message: String },

    /// A stage was not executed
    StageSkipped { stage: Stage, reason: String },

    /// A stage failed; the run stops after this event
    StageFailed {
        stage: Stage,
        message: String,
        detail: Option<String>,
    },

    /// Every stage succeeded
    Completed {
        host: String,
        remote_path: String,
        excluded: usize,
        steps: usize,
        elapsed: Duration,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Stage-labelled terminal output
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
