//! Event Sink Implementations
//!
//! Provides concrete implementations of PipelineEventSink:
//! - ConsoleEventSink: human-readable status lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
