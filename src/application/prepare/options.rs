//! Prepare Options
//!
//! Inputs for one prepare run, already merged from CLI flags and environment.

use std::path::PathBuf;

/// Project-level config file searched for under the workspace
pub const DEFAULT_CONFIG_NAME: &str = "fortify.yml";

/// Options for the prepare use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareOptions {
    /// Workspace root (`WORKSPACE`)
    pub workspace: Option<PathBuf>,
    /// Main config file (`MAIN_YML_PATH`)
    pub main_config: Option<PathBuf>,
    /// File name of the project-level config
    pub config_name: String,
    /// Extra attempts for each remote command
    pub retries: u32,
    /// Report prune matches and planned commands without side effects
    pub dry_run: bool,
}

impl PrepareOptions {
    pub fn new(workspace: impl Into<PathBuf>, main_config: impl Into<PathBuf>) -> Self {
        Self {
            workspace: Some(workspace.into()),
            main_config: Some(main_config.into()),
            ..Self::default()
        }
    }

    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = name.into();
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            workspace: None,
            main_config: None,
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            retries: 0,
            dry_run: false,
        }
    }
}
