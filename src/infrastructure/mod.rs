//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - Workspace validation, YAML loading, project config search
//! - `events/` - Pipeline event sinks (console, NDJSON)
//! - `fs/` - Exclusion pruning
//! - `process/` - Process runner
//! - `transfer/` - Remote clean and scp copy invocations

pub mod config;
pub mod events;
pub mod fs;
pub mod process;
pub mod transfer;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::ProcessRunner;
pub use transfer::{RemoteCleanInvocation, ScpCopyInvocation};
