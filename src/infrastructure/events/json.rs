//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event into its NDJSON object
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            alias,
            host,
            destination,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "alias": alias,
            "host": host,
            "destination": destination,
            "dry_run": dry_run,
        }),

        DeployEvent::StageStarted { stage } => serde_json::json!({
            "event": "stage_start",
            "stage": stage,
            "index": stage.number(),
        }),

        DeployEvent::CommandIssued {
            stage,
            command_line,
        } => serde_json::json!({
            "event": "command",
            "stage": stage,
            "command_line": command_line,
        }),

        DeployEvent::ToolFound { name, path } => serde_json::json!({
            "event": "tool_found",
            "name": name,
            "path": path.display().to_string(),
        }),

        DeployEvent::ToolMissing { name } => serde_json::json!({
            "event": "tool_missing",
            "name": name,
        }),

        DeployEvent::AboutToDeploy { host } => serde_json::json!({
            "event": "about_to_deploy",
            "host": host,
        }),

        DeployEvent::StageCompleted { stage, message } => serde_json::json!({
            "event": "stage_complete",
            "stage": stage,
            "message": message,
        }),

        DeployEvent::StageSkipped { stage, reason } => serde_json::json!({
            "event": "stage_skipped",
            "stage": stage,
            "reason": reason,
        }),

        DeployEvent::StageFailed {
            stage,
            message,
            detail,
        } => serde_json::json!({
            "event": "stage_failed",
            "stage": stage,
            "message": message,
            "detail": detail,
        }),

        DeployEvent::Completed {
            host,
            remote_path,
            excluded,
            steps,
            elapsed,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "host": host,
            "remote_path": remote_path,
            "excluded_patterns": excluded,
            "remote_steps": steps,
            "elapsed_ms": elapsed.as_millis() as u64,
            "dry_run": dry_run,
            "finished_at": chrono::Utc::now().to_rfc3339(),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Stage;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_object_per_line() {
        let buf = SharedBuf::default();
        let sink = JsonEventSink::with_writer(buf.clone());

        sink.on_event(DeployEvent::StageStarted {
            stage: Stage::Sync,
        });
        sink.on_event(DeployEvent::ToolMissing {
            name: "rsync".to_string(),
        });

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "stage_start");
        assert_eq!(first["stage"], "sync");
        assert_eq!(first["index"], 3);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["name"], "rsync");
    }

    #[test]
    fn completion_carries_timestamp_and_elapsed() {
        let json = event_to_json(&DeployEvent::Completed {
            host: "1.2.3.4".to_string(),
            remote_path: "/srv/app".to_string(),
            excluded: 2,
            steps: 5,
            elapsed: Duration::from_millis(1500),
            dry_run: false,
        });

        assert_eq!(json["event"], "complete");
        assert_eq!(json["elapsed_ms"], 1500);
        assert!(json["finished_at"].as_str().unwrap().contains('T'));
    }
}
