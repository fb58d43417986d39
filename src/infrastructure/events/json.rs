//! JSON Event Sink
//!
//! Outputs resolution events as NDJSON for build-scan style consumers.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ResolutionEvent, ResolutionEventSink};

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
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

impl ResolutionEventSink for JsonEventSink {
    fn on_event(&self, event: ResolutionEvent) {
        let json = match event {
            ResolutionEvent::Resolving { notation, packaged } => serde_json::json!({
                "event": "resolving",
                "notation": notation.display_name(),
                "packaged": packaged,
            }),

            ResolutionEvent::Relocating {
                notation,
                kind,
                input_count,
            } => serde_json::json!({
                "event": "relocating",
                "notation": notation.display_name(),
                "kind": kind,
                "input_count": input_count,
            }),

            ResolutionEvent::Relocated {
                notation,
                kind,
                artifact,
            } => serde_json::json!({
                "event": "relocated",
                "notation": notation.display_name(),
                "kind": kind,
                "artifact": artifact.display().to_string(),
            }),

            ResolutionEvent::Resolved {
                notation,
                file_count,
                relocated,
            } => serde_json::json!({
                "event": "resolved",
                "notation": notation.display_name(),
                "file_count": file_count,
                "relocated": relocated,
            }),

            ResolutionEvent::Failed {
                notation,
                stage,
                error,
            } => serde_json::json!({
                "event": "failed",
                "notation": notation.display_name(),
                "stage": stage.as_str(),
                "error": error,
            }),
        };

        self.write_event(json);
    }
}
