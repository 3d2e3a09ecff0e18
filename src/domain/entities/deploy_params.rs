//! Deployment parameters
//!
//! The typed view of the merged configuration. Bound fields come from the
//! document through the binder; `project_name` and `project_path` are derived
//! by [`DeployParams::finalize`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::services::{Bindable, BoundValue, FieldBinding, FieldShape};
use crate::domain::value_objects::SafeRelativePath;
use crate::error::ConfigError;

/// Remote base directory used when `ssh.remoteRoot` is not set
pub const DEFAULT_REMOTE_ROOT: &str = "/source_codes";

pub const PATH_PROJECT: &str = "proj.relativePath";
pub const PATH_EXCLUDES: &str = "proj.excludeRegExps";
pub const PATH_SSH_HOST: &str = "ssh.host";
pub const PATH_SSH_USERNAME: &str = "ssh.username";
pub const PATH_REMOTE_ROOT: &str = "ssh.remoteRoot";
pub const PATH_KEEP_REPORTS: &str = "ssh.keepReports";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployParams {
    pub project_rel_path: String,
    pub exclude_patterns: Vec<String>,
    pub ssh_host: String,
    pub ssh_username: String,
    pub remote_root: String,
    pub keep_reports: bool,
    /// Last component of `project_path`
    pub project_name: String,
    /// Absolute project directory under the workspace
    pub project_path: PathBuf,
}

impl Bindable for DeployParams {
    fn bindings() -> Vec<FieldBinding<Self>> {
        vec![
            FieldBinding {
                name: "project_rel_path",
                path: PATH_PROJECT,
                shape: FieldShape::String,
                apply: |p, v| {
                    if let BoundValue::String(s) = v {
                        p.project_rel_path = s;
                    }
                },
            },
            FieldBinding {
                name: "exclude_patterns",
                path: PATH_EXCLUDES,
                shape: FieldShape::StringList,
                apply: |p, v| {
                    if let BoundValue::StringList(list) = v {
                        p.exclude_patterns = list;
                    }
                },
            },
            FieldBinding {
                name: "ssh_host",
                path: PATH_SSH_HOST,
                shape: FieldShape::String,
                apply: |p, v| {
                    if let BoundValue::String(s) = v {
                        p.ssh_host = s;
                    }
                },
            },
            FieldBinding {
                name: "ssh_username",
                path: PATH_SSH_USERNAME,
                shape: FieldShape::String,
                apply: |p, v| {
                    if let BoundValue::String(s) = v {
                        p.ssh_username = s;
                    }
                },
            },
            FieldBinding {
                name: "remote_root",
                path: PATH_REMOTE_ROOT,
                shape: FieldShape::String,
                apply: |p, v| {
                    if let BoundValue::String(s) = v {
                        p.remote_root = s;
                    }
                },
            },
            FieldBinding {
                name: "keep_reports",
                path: PATH_KEEP_REPORTS,
                shape: FieldShape::Bool,
                apply: |p, v| {
                    if let BoundValue::Bool(b) = v {
                        p.keep_reports = b;
                    }
                },
            },
        ]
    }
}

impl DeployParams {
    /// Run the post-bind checks and fill in derived fields.
    ///
    /// Checks run in this order: project path present, project path safe,
    /// project directory exists, ssh host present, ssh username present,
    /// neither host nor username starting with `-`.
    /// `dir_exists` is the directory probe, injected so the checks stay pure.
    pub fn finalize(
        mut self,
        workspace: &Path,
        dir_exists: impl Fn(&Path) -> bool,
    ) -> Result<Self, ConfigError> {
        require(&self.project_rel_path, PATH_PROJECT)?;
        let relative = SafeRelativePath::new(self.project_rel_path.as_str())?;

        let project_path = relative.join_under(workspace);
        if !dir_exists(&project_path) {
            return Err(ConfigError::ProjectDirNotFound { path: project_path });
        }
        self.project_name = project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.project_path = project_path;

        require(&self.ssh_host, PATH_SSH_HOST)?;
        require(&self.ssh_username, PATH_SSH_USERNAME)?;
        reject_option_like(&self.ssh_host, PATH_SSH_HOST)?;
        reject_option_like(&self.ssh_username, PATH_SSH_USERNAME)?;

        if self.remote_root.trim().is_empty() {
            self.remote_root = DEFAULT_REMOTE_ROOT.to_string();
        }

        Ok(self)
    }

    /// `user@host` destination for ssh and scp
    pub fn ssh_destination(&self) -> String {
        format!("{}@{}", self.ssh_username, self.ssh_host)
    }

    pub fn remote_layout(&self) -> RemoteLayout {
        RemoteLayout::new(&self.remote_root, &self.ssh_username, &self.project_name)
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    Ok(())
}

/// ssh and scp parse a leading `-` as an option even when quoted
fn reject_option_like(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.starts_with('-') {
        return Err(ConfigError::OptionLikeValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Where the project lands on the remote host. Always `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteLayout {
    /// `<root>/<user>`, the scp target
    pub user_dir: String,
    /// `<root>/<user>/<project>`
    pub source_dir: String,
    /// `<root>/<user>/Report/<project>`
    pub report_dir: String,
}

impl RemoteLayout {
    pub fn new(root: &str, username: &str, project_name: &str) -> Self {
        let user_dir = remote_join(&[root, username]);
        Self {
            source_dir: remote_join(&[&user_dir, project_name]),
            report_dir: remote_join(&[&user_dir, "Report", project_name]),
            user_dir,
        }
    }
}

fn remote_join(parts: &[&str]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        let part = if i == 0 {
            part.trim_end_matches('/')
        } else {
            part.trim_matches('/')
        };
        if part.is_empty() {
            continue;
        }
        if i > 0 {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}
