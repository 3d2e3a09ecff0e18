//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
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

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let json = match event {
            PipelineEvent::Started { workspace, dry_run } => {
                serde_json::json!({
                    "event": "start",
                    "command": "prepare",
                    "workspace": workspace.map(|w| w.display().to_string()),
                    "dry_run": dry_run,
                })
            }

            PipelineEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage_start",
                    "stage": stage.as_str(),
                })
            }

            PipelineEvent::ConfigLoaded {
                path,
                top_level_keys,
            } => {
                serde_json::json!({
                    "event": "config_loaded",
                    "path": path.display().to_string(),
                    "top_level_keys": top_level_keys,
                })
            }

            PipelineEvent::Merged { overridden } => {
                serde_json::json!({
                    "event": "merged",
                    "overridden": overridden,
                })
            }

            PipelineEvent::ParamsResolved { params } => {
                serde_json::json!({
                    "event": "params_resolved",
                    "params": params,
                })
            }

            PipelineEvent::PathPruned { path, pattern } => {
                serde_json::json!({
                    "event": "path_pruned",
                    "path": path.display().to_string(),
                    "pattern": pattern,
                })
            }

            PipelineEvent::CommandPlanned { action, command } => {
                serde_json::json!({
                    "event": "command_planned",
                    "action": action,
                    "command": command,
                })
            }

            PipelineEvent::AttemptFinished {
                action,
                attempt,
                exit_code,
            } => {
                serde_json::json!({
                    "event": "attempt_finished",
                    "action": action,
                    "attempt": attempt,
                    "exit_code": exit_code,
                })
            }

            PipelineEvent::StageFailed { stage, error } => {
                serde_json::json!({
                    "event": "stage_failed",
                    "stage": stage.as_str(),
                    "error": error,
                })
            }

            PipelineEvent::Completed { success } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "prepare",
                    "status": if success { "success" } else { "failed" },
                })
            }
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Stage;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::Started {
            workspace: Some(PathBuf::from("/ws")),
            dry_run: true,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["workspace"], "/ws");
        assert_eq!(events[0]["dry_run"], true);
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::AttemptFinished {
            action: "copy",
            attempt: 2,
            exit_code: 1,
        });
        sink.on_event(PipelineEvent::StageFailed {
            stage: Stage::Copy,
            error: "copy failed after 2 attempt(s), last exit code 1".to_string(),
        });
        sink.on_event(PipelineEvent::Completed { success: false });

        let events = lines(&buffer);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["exit_code"], 1);
        assert_eq!(events[1]["stage"], "copy");
        assert_eq!(events[2]["status"], "failed");
    }

    #[test]
    fn json_sink_serializes_params() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PipelineEvent::ParamsResolved {
            params: crate::domain::entities::DeployParams {
                ssh_host: "scan01".to_string(),
                exclude_patterns: vec!["\\.git$".to_string()],
                ..Default::default()
            },
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["params"]["ssh_host"], "scan01");
        assert_eq!(events[0]["params"]["exclude_patterns"][0], "\\.git$");
    }
}
