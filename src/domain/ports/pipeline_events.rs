//! Pipeline Event Port
//!
//! Observable interface for a prepare run.
//! Enables console status lines, NDJSON event streams, and tests.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::DeployParams;

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Workspace,
    LoadConfig,
    Merge,
    Bind,
    Prune,
    RemoteClean,
    Copy,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Workspace => "workspace",
            Stage::LoadConfig => "load-config",
            Stage::Merge => "merge",
            Stage::Bind => "bind",
            Stage::Prune => "prune",
            Stage::RemoteClean => "remote-clean",
            Stage::Copy => "copy",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during a prepare run
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Run started; `workspace` is the root as supplied, before validation
    Started {
        workspace: Option<PathBuf>,
        dry_run: bool,
    },

    /// A stage began
    StageStarted { stage: Stage },

    /// A configuration document was decoded
    ConfigLoaded { path: PathBuf, top_level_keys: usize },

    /// Project config merged over main config
    Merged { overridden: Vec<String> },

    /// Parameters bound and validated
    ParamsResolved { params: DeployParams },

    /// A path matched an exclusion pattern (deleted unless dry run)
    PathPruned { path: PathBuf, pattern: String },

    /// A remote command was composed
    CommandPlanned { action: &'static str, command: String },

    /// One attempt of a remote command finished
    AttemptFinished {
        action: &'static str,
        attempt: u32,
        exit_code: i32,
    },

    /// A stage failed; the run stops here
    StageFailed { stage: Stage, error: String },

    /// Run finished
    Completed { success: bool },
}

/// Trait for receiving pipeline events
///
/// Implementations can be:
/// - ConsoleEventSink: status lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PipelineEventSink: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);

    /// Check if this sink wants per-path and per-attempt events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
