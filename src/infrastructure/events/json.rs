//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::application::COMPLETION_MESSAGE;
use crate::domain::ports::{DeployEvent, DeployEventSink};
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

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                workdir,
                step_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "workdir": workdir.display().to_string(),
                    "step_count": step_count,
                    "dry_run": dry_run,
                })
            }

            DeployEvent::StepStarted {
                index,
                kind,
                command,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "deploy",
                    "index": index,
                    "step": kind,
                    "run": command,
                })
            }

            DeployEvent::StepFinished {
                index,
                kind,
                outcome,
            } => {
                serde_json::json!({
                    "event": "step_finish",
                    "command": "deploy",
                    "index": index,
                    "step": kind,
                    "outcome": outcome,
                })
            }

            DeployEvent::Completed {
                completed,
                skipped,
                failed,
                suppressed,
            } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "completed": completed,
                    "skipped": skipped,
                    "failed": failed,
                    "suppressed": suppressed,
                    "message": COMPLETION_MESSAGE,
                })
            }
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{StepKind, StepOutcome};
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
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            workdir: PathBuf::from("/work"),
            step_count: 7,
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["step_count"], 7);
    }

    #[test]
    fn json_sink_step_events_carry_kind_and_outcome() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::StepStarted {
            index: 5,
            kind: StepKind::Commit,
            command: Some("git commit -m x".to_string()),
        });
        sink.on_event(DeployEvent::StepFinished {
            index: 5,
            kind: StepKind::Commit,
            outcome: StepOutcome::Suppressed { code: Some(1) },
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["step"], "commit");
        assert_eq!(events[0]["run"], "git commit -m x");
        assert_eq!(events[1]["event"], "step_finish");
        assert_eq!(events[1]["outcome"]["status"], "suppressed");
    }

    #[test]
    fn json_sink_complete_is_partial_on_failure() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            completed: 5,
            skipped: 1,
            failed: 1,
            suppressed: 0,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "partial");
        assert_eq!(events[0]["message"], "Deploy process finished!");
    }
}
