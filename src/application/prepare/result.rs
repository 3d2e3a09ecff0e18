//! Prepare Result
//!
//! What a run produced, and how a failed run is reported.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::DeployParams;
use crate::domain::ports::{ExecutionRecord, Stage};
use crate::error::ScanprepError;
use crate::infrastructure::fs::PrunedPath;

/// A composed remote command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub action: &'static str,
    pub command: String,
}

/// Result of a successful prepare run
#[derive(Debug, Clone, Default)]
pub struct PrepareReport {
    pub workspace: PathBuf,
    pub main_config: PathBuf,
    pub project_config: PathBuf,
    /// Key paths where the project config replaced a main-config value
    pub overridden: Vec<String>,
    pub params: DeployParams,
    /// Paths removed, or in a dry run the paths that would be removed
    pub pruned: Vec<PrunedPath>,
    /// Remote commands in execution order
    pub commands: Vec<PlannedCommand>,
    /// `None` in a dry run
    pub remote_clean: Option<ExecutionRecord>,
    /// `None` in a dry run
    pub copy: Option<ExecutionRecord>,
    pub dry_run: bool,
}

/// The stage a run stopped at, with its cause
#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct PrepareFailure {
    pub stage: Stage,
    #[source]
    pub source: ScanprepError,
}
