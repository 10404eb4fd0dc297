//! Event Sink Implementations
//!
//! Provides concrete implementations of CleanupEventSink:
//! - TextEventSink: the plain-text transcript
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod text;

pub use json::{event_to_json, JsonEventSink};
pub use text::{render_event, render_failure, TextEventSink};
