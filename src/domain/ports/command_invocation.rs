//! Command Invocation Port
//!
//! A unit of external-process work. Implementations describe *what* to run;
//! the process runner decides *how*.
//!
//! An invocation is consumed by one run: the runner writes the final
//! [`ExecutionRecord`] back onto it through [`CommandInvocation::record`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::PlatformProfile;
use crate::error::ProcessError;

/// Everything needed to compose one shell command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub working_dir: Option<PathBuf>,
    /// Extra attempts after the first one
    pub retry_budget: u32,
    env: BTreeMap<String, String>,
    groups: Vec<Vec<String>>,
}

impl CommandSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_retry_budget(mut self, budget: u32) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Set an environment assignment. Empty keys are ignored; the last write
    /// for a key wins.
    pub fn put_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.env.insert(key, value.into());
    }

    /// Append one command group. Empty groups are ignored.
    pub fn add_command<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if group.is_empty() {
            return;
        }
        self.groups.push(group);
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Total attempts the runner may make
    pub fn max_attempts(&self) -> u32 {
        self.retry_budget.saturating_add(1)
    }

    /// Compose the single command string handed to the shell.
    ///
    /// Assignments come first (in key order), then each group with its tokens
    /// joined by spaces. Every piece is joined with the platform's AND
    /// operator, without padding, so a failing piece stops the rest.
    pub fn render(&self, platform: &PlatformProfile) -> String {
        let assignments = self
            .env
            .iter()
            .map(|(key, value)| platform.assignment(key, value));
        let commands = self.groups.iter().map(|group| group.join(" "));
        assignments
            .chain(commands)
            .collect::<Vec<_>>()
            .join(platform.and_operator)
    }
}

/// Outcome of one attempt, passed to the completion hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Zero-based attempt index
    pub index: u32,
    pub exit_code: i32,
    /// Whether the invocation's success predicate accepted the exit code
    pub succeeded: bool,
}

/// Final result written back onto an invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub success: bool,
    pub exit_code: i32,
    pub attempts: u32,
    /// Rendered command line of the last attempt
    pub command: String,
    /// Standard output lines of the last attempt
    pub stdout: Vec<String>,
    /// Standard error lines of the last attempt
    pub stderr: Vec<String>,
}

/// An external command the process runner can execute
pub trait CommandInvocation {
    /// Short action name for logs and errors
    fn action(&self) -> &'static str;

    /// Describe the command for the given platform
    fn build(&self, platform: &PlatformProfile) -> CommandSpec;

    /// Success predicate, checked after every attempt
    fn is_success(&self, exit_code: i32) -> bool {
        exit_code == 0
    }

    /// Called after every attempt, successful or not
    fn on_attempt_complete(&mut self, _attempt: &AttemptRecord) {}

    /// Receive the final execution result
    fn record(&mut self, record: ExecutionRecord);

    /// Result of the last run, if any
    fn last_record(&self) -> Option<&ExecutionRecord>;

    /// Attempts seen by [`on_attempt_complete`](Self::on_attempt_complete),
    /// for invocations that keep them
    fn attempt_history(&self) -> &[AttemptRecord] {
        &[]
    }

    /// `true` once a run has finished successfully
    fn succeeded(&self) -> bool {
        self.last_record().map(|r| r.success).unwrap_or(false)
    }
}

/// Something that can run a [`CommandInvocation`] to completion
///
/// Implemented by the process runner; use cases depend on this trait so the
/// remote steps can be replaced in tests.
pub trait CommandExecutor {
    /// Shell profile commands are rendered for
    fn platform(&self) -> &PlatformProfile;

    /// Run until success or until attempts are exhausted. `Ok(false)` means
    /// the command ran but never satisfied its success predicate.
    fn execute(&self, invocation: &mut dyn CommandInvocation) -> Result<bool, ProcessError>;
}
