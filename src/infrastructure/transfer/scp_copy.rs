//! SCP copy
//!
//! Recursively copies the local project directory into the remote user
//! directory, so it lands at `<root>/<user>/<project>`.

use std::path::PathBuf;

use super::{quote_arg, RunState};
use crate::domain::entities::DeployParams;
use crate::domain::ports::{AttemptRecord, CommandInvocation, CommandSpec, ExecutionRecord};
use crate::domain::value_objects::PlatformProfile;

#[derive(Debug, Clone)]
pub struct ScpCopyInvocation {
    source: PathBuf,
    target: String,
    retry_budget: u32,
    state: RunState,
}

impl ScpCopyInvocation {
    pub fn new(params: &DeployParams, retry_budget: u32) -> Self {
        let layout = params.remote_layout();
        Self {
            source: params.project_path.clone(),
            target: format!("{}:{}", params.ssh_destination(), layout.user_dir),
            retry_budget,
            state: RunState::default(),
        }
    }

    /// `user@host:<dir>` argument handed to scp
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl CommandInvocation for ScpCopyInvocation {
    fn action(&self) -> &'static str {
        "copy"
    }

    fn build(&self, platform: &PlatformProfile) -> CommandSpec {
        let mut spec = CommandSpec::new().with_retry_budget(self.retry_budget);
        spec.add_command([
            "scp".to_string(),
            "-r".to_string(),
            quote_arg(platform, &self.source.to_string_lossy()),
            quote_arg(platform, &self.target),
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
