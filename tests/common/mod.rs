//! Shared fixtures for scanprep integration tests.
//!
//! - `Workspace`: a temp workspace with a project, a project config and a
//!   main config in a separate directory
//! - `FakeRemote`: `ssh`/`scp` stand-ins that log their arguments
//! - `run_scanprep`: runs the binary with an isolated environment

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const MAIN_YML: &str = r#"
proj:
  excludeRegExps: ["\\.log$"]
ssh:
  host: scan01
  username: alice
"#;

pub const PROJECT_YML: &str = r#"
proj:
  relativePath: services/api
  excludeRegExps: ["node_modules", "\\.log$"]
"#;

/// Result of running the scanprep binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct Workspace {
    pub root: TempDir,
    pub config_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_project_config(PROJECT_YML)
    }

    pub fn with_project_config(project_yml: &str) -> Self {
        let root = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();

        let api = root.path().join("services/api");
        fs::create_dir_all(api.join("src")).unwrap();
        fs::create_dir_all(api.join("node_modules/left-pad")).unwrap();
        fs::write(api.join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(api.join("node_modules/left-pad/index.js"), "module.exports = 1;\n").unwrap();
        fs::write(api.join("build.log"), "ok\n").unwrap();
        fs::write(api.join("fortify.yml"), project_yml).unwrap();
        fs::write(config_dir.path().join("main.yml"), MAIN_YML).unwrap();

        Self { root, config_dir }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn project(&self, relative: &str) -> PathBuf {
        self.root.path().join("services/api").join(relative)
    }

    pub fn main_config(&self) -> PathBuf {
        self.config_dir.path().join("main.yml")
    }
}

/// Stand-in `ssh` and `scp` executables that append their argv to a log
/// file and exit with a configurable code.
#[cfg(unix)]
pub struct FakeRemote {
    pub bin: TempDir,
}

#[cfg(unix)]
impl FakeRemote {
    pub fn new(ssh_exit: i32, scp_exit: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().unwrap();
        for (name, code) in [("ssh", ssh_exit), ("scp", scp_exit)] {
            let script = bin.path().join(name);
            let log = bin.path().join("calls.log");
            fs::write(
                &script,
                format!(
                    "#!/bin/sh\necho \"{name} $*\" >> '{}'\nexit {code}\n",
                    log.display()
                ),
            )
            .unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }
        Self { bin }
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// PATH with the fake binaries first
    pub fn path_var(&self) -> String {
        let inherited = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin.path().display(), inherited)
    }
}

/// Run scanprep with the scanprep-related environment cleared.
pub fn run_scanprep(args: &[&str], env: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanprep"));
    cmd.args(args)
        .env_remove("WORKSPACE")
        .env_remove("MAIN_YML_PATH")
        .env_remove("SCANPREP_CONFIG_NAME")
        .env_remove("SCANPREP_RETRIES")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("failed to run scanprep");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
