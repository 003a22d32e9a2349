//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

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
        let level = event.severity().label().to_lowercase();

        let json = match event {
            DeployEvent::Started {
                environment,
                project_dir,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "level": level,
                    "environment": environment.to_string(),
                    "project_dir": project_dir.display().to_string(),
                    "dry_run": dry_run,
                })
            }

            DeployEvent::TargetResolved {
                bucket_url,
                distribution_id,
            } => {
                serde_json::json!({
                    "event": "target_resolved",
                    "level": level,
                    "bucket_url": bucket_url,
                    "distribution_id": distribution_id,
                })
            }

            DeployEvent::ConfigWarning { warning } => {
                serde_json::json!({
                    "event": "config_warning",
                    "level": level,
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            }

            DeployEvent::AssetStarted {
                index,
                name,
                kind,
                source,
                destination,
            } => {
                serde_json::json!({
                    "event": "item_start",
                    "level": level,
                    "index": index,
                    "asset": name,
                    "kind": kind.as_str(),
                    "source": source.display().to_string(),
                    "destination": destination,
                })
            }

            DeployEvent::AssetSynced { index, name } => {
                serde_json::json!({
                    "event": "item_synced",
                    "level": level,
                    "index": index,
                    "asset": name,
                })
            }

            DeployEvent::AssetSkipped { index, name, path } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "level": level,
                    "index": index,
                    "asset": name,
                    "path": path.display().to_string(),
                    "reason": "not found",
                })
            }

            DeployEvent::EntryPointUploaded {
                destination,
                cache_control,
            } => {
                serde_json::json!({
                    "event": "entry_point_uploaded",
                    "level": level,
                    "destination": destination,
                    "cache_control": cache_control,
                })
            }

            DeployEvent::EntryPointMissing { path } => {
                serde_json::json!({
                    "event": "entry_point_missing",
                    "level": level,
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::InvalidationSubmitted {
                distribution_id,
                invalidation_id,
                caller_reference,
            } => {
                serde_json::json!({
                    "event": "invalidation_submitted",
                    "level": level,
                    "distribution_id": distribution_id,
                    "invalidation_id": invalidation_id,
                    "caller_reference": caller_reference,
                })
            }

            DeployEvent::InvalidationSkipped { distribution_id } => {
                serde_json::json!({
                    "event": "invalidation_skipped",
                    "level": level,
                    "distribution_id": distribution_id,
                    "reason": "dry run",
                })
            }

            DeployEvent::CommandOutput { output } => {
                serde_json::json!({
                    "event": "command_output",
                    "level": level,
                    "output": output,
                })
            }

            DeployEvent::Completed {
                synced_count,
                skipped_count,
                dry_run,
            } => {
                let status = if skipped_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "level": level,
                    "status": status,
                    "synced": synced_count,
                    "skipped": skipped_count,
                    "dry_run": dry_run,
                })
            }

            DeployEvent::Failed { error } => {
                serde_json::json!({
                    "event": "failed",
                    "level": level,
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_debug_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Environment;
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

        sink.on_event(DeployEvent::Started {
            environment: Environment::Prod,
            project_dir: PathBuf::from("/srv/site"),
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["environment"], "prod");
        assert_eq!(events[0]["level"], "info");
    }

    #[test]
    fn json_sink_marks_skips_as_warnings() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::AssetSkipped {
            index: 2,
            name: "robots.txt".to_string(),
            path: PathBuf::from("/srv/site/robots.txt"),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "item_skipped");
        assert_eq!(events[0]["level"], "warning");
        assert_eq!(events[0]["asset"], "robots.txt");
    }

    #[test]
    fn json_sink_outputs_partial_on_skips() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            synced_count: 2,
            skipped_count: 3,
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "partial");
        assert_eq!(events[0]["synced"], 2);
    }

    #[test]
    fn json_sink_outputs_failed_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Failed {
            error: "failed to sync style.css: boom".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "failed");
        assert_eq!(events[0]["level"], "error");
        assert_eq!(events[0]["error"], "failed to sync style.css: boom");
    }

    #[test]
    fn json_sink_wants_debug_events() {
        assert!(JsonEventSink::with_writer(Vec::new()).wants_debug_events());
    }
}
