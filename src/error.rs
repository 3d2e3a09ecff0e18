//! Error types for Scanprep
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Configuration problems and process-level failures are kept apart so the
//! pipeline can report which stage broke.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scanprep operations
pub type ScanprepResult<T> = Result<T, ScanprepError>;

/// Configuration problems. None of these are retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required parameter resolved to nothing or to an empty string
    #[error("missing required parameter '{field}'")]
    MissingField { field: &'static str },

    /// A relative path contains a `..` segment
    #[error("relative path '{path}' must not contain '..'")]
    UnsafePath { path: String },

    /// A value handed to ssh/scp would be read as a command-line option
    #[error("parameter '{field}' must not start with '-': {value}")]
    OptionLikeValue { field: &'static str, value: String },

    /// A sequence element could not be read as a scalar
    #[error("element {index} of '{field}' is not a scalar value")]
    InvalidElement { field: &'static str, index: usize },

    /// The bound project directory does not exist under the workspace
    #[error("project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    /// No workspace root was supplied
    #[error("workspace root not provided (set WORKSPACE or pass --workspace)")]
    WorkspaceNotSet,

    /// The workspace root must be absolute
    #[error("workspace root must be an absolute path: {path}")]
    WorkspaceNotAbsolute { path: PathBuf },

    /// The workspace root must be an existing directory
    #[error("workspace root is not a directory: {path}")]
    WorkspaceNotDirectory { path: PathBuf },

    /// No main configuration file was supplied
    #[error("main config not provided (set MAIN_YML_PATH or pass --main-config)")]
    MainConfigNotSet,

    /// A configuration file path does not point to a file
    #[error("config file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// The project-level config file was not found anywhere in the workspace
    #[error("no '{name}' found under {root}; place one anywhere in the project")]
    ProjectConfigMissing { name: String, root: PathBuf },

    /// A document's top level is not a mapping
    #[error("config file {path} must contain a mapping at the top level")]
    NotAMapping { path: PathBuf },

    /// YAML decoding failed
    #[error("invalid YAML in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Reading a config file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Process-level failures. These abort the whole invocation.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The shell could not be started
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child's stdout or stderr pipe was not available after spawn
    #[error("child {stream} pipe unavailable")]
    PipeUnavailable { stream: &'static str },

    /// Waiting on the child failed
    #[error("failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),

    /// The child ended without an exit code (e.g. killed by a signal)
    #[error("child process terminated abnormally: {cause}")]
    AbnormalTermination { cause: String },

    /// An output drain worker panicked
    #[error("{stream} reader thread panicked")]
    ReaderPanicked { stream: &'static str },
}

/// Failures while deleting excluded paths
#[derive(Error, Debug)]
pub enum PruneError {
    /// An exclusion pattern is not a valid regular expression
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Walking or deleting failed
    #[error("failed to prune {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main error type for Scanprep operations
#[derive(Error, Debug)]
pub enum ScanprepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Prune(#[from] PruneError),

    /// A remote command exhausted its attempts without succeeding
    #[error("{action} failed after {attempts} attempt(s), last exit code {exit_code}")]
    CommandFailed {
        action: &'static str,
        attempts: u32,
        exit_code: i32,
    },
}
