//! Remote clean
//!
//! Removes the previous upload (and, unless kept, the previous report) on the
//! scan host and recreates an empty source directory. Runs as one ssh call:
//!
//! ```text
//! ssh user@host "rm -rf '<source>' '<report>' && mkdir -p '<source>'"
//! ```

use super::{quote_arg, quote_remote_command, shell_quote, RunState};
use crate::domain::entities::{DeployParams, RemoteLayout};
use crate::domain::ports::{AttemptRecord, CommandInvocation, CommandSpec, ExecutionRecord};
use crate::domain::value_objects::PlatformProfile;

#[derive(Debug, Clone)]
pub struct RemoteCleanInvocation {
    destination: String,
    layout: RemoteLayout,
    keep_reports: bool,
    retry_budget: u32,
    state: RunState,
}

impl RemoteCleanInvocation {
    pub fn new(params: &DeployParams, retry_budget: u32) -> Self {
        Self {
            destination: params.ssh_destination(),
            layout: params.remote_layout(),
            keep_reports: params.keep_reports,
            retry_budget,
            state: RunState::default(),
        }
    }

    /// Command run on the remote host
    fn remote_script(&self) -> String {
        let mut doomed = vec![shell_quote(&self.layout.source_dir)];
        if !self.keep_reports {
            doomed.push(shell_quote(&self.layout.report_dir));
        }
        format!(
            "rm -rf {} && mkdir -p {}",
            doomed.join(" "),
            shell_quote(&self.layout.source_dir)
        )
    }
}

impl CommandInvocation for RemoteCleanInvocation {
    fn action(&self) -> &'static str {
        "remote-clean"
    }

    fn build(&self, platform: &PlatformProfile) -> CommandSpec {
        let mut spec = CommandSpec::new().with_retry_budget(self.retry_budget);
        spec.add_command([
            "ssh".to_string(),
            quote_arg(platform, &self.destination),
            quote_remote_command(platform, &self.remote_script()),
        ]);
        spec
    }

    fn on_attempt_complete(&mut self, attempt: &AttemptRecord) {
        self.state.push(attempt);
    }

    fn record(&mut self, record: ExecutionRecord) {
        self.state.record = Some(record);
    }

    fn last_record(&self) -> Option<&ExecutionRecord> {
        self.state.record.as_ref()
    }

    fn attempt_history(&self) -> &[AttemptRecord] {
        &self.state.history
    }
}
