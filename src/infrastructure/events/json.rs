//! JSON Event Sink
//!
//! Outputs cleanup events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CleanupEvent, CleanupEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

const COMMAND: &str = "single-role-delete";

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

/// Convert an event to its JSON object
pub fn event_to_json(event: CleanupEvent) -> serde_json::Value {
    match event {
        CleanupEvent::Started { role, dry_run } => serde_json::json!({
            "event": "start",
            "command": COMMAND,
            "version": env!("CARGO_PKG_VERSION"),
            "role": role,
            "dry_run": dry_run,
        }),

        CleanupEvent::NoMatches { role } => serde_json::json!({
            "event": "no_matches",
            "command": COMMAND,
            "role": role,
        }),

        CleanupEvent::UserProcessed {
            id,
            display_name,
            role,
            action,
        } => serde_json::json!({
            "event": "user_processed",
            "command": COMMAND,
            "id": id,
            "display_name": display_name,
            "role": role,
            "action": action,
        }),

        CleanupEvent::DeleteFailed {
            id,
            display_name,
            error,
        } => serde_json::json!({
            "event": "user_failed",
            "command": COMMAND,
            "id": id,
            "display_name": display_name,
            "error": error,
        }),

        CleanupEvent::Finished {
            dry_run,
            processed,
            failed,
        } => serde_json::json!({
            "event": "complete",
            "command": COMMAND,
            "success": failed == 0,
            "dry_run": dry_run,
            "processed": processed,
            "failed": failed,
        }),
    }
}

impl CleanupEventSink for JsonEventSink {
    fn on_event(&self, event: CleanupEvent) {
        self.write_event(event_to_json(event));
    }
}
