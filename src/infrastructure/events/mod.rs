//! Event Sink Implementations
//!
//! Concrete implementations of ResolutionEventSink:
//! - JsonEventSink: NDJSON output for automation

mod json;

pub use json::JsonEventSink;
