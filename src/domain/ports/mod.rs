//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_invocation;
pub mod pipeline_events;

pub use command_invocation::{
    AttemptRecord, CommandExecutor, CommandInvocation, CommandSpec, ExecutionRecord,
};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink, Stage};
