//! Scanprep - prepares a workspace project for remote static analysis
//!
//! A main YAML config and a project-level YAML config found in the workspace
//! are merged, bound to typed deployment parameters, and used to prune
//! excluded paths, clean the remote directories over ssh, and copy the
//! project with scp.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{PrepareFailure, PrepareOptions, PrepareReport, PrepareUseCase};
pub use domain::entities::{DeployParams, RemoteLayout};
pub use domain::ports::{CommandExecutor, CommandInvocation, CommandSpec, ExecutionRecord};
pub use domain::services::{bind, merge_mappings, resolve};
pub use domain::value_objects::{check_path_is_safe, DynamicValue, Mapping, PlatformProfile};
pub use error::{ConfigError, ProcessError, PruneError, ScanprepError, ScanprepResult};
pub use infrastructure::ProcessRunner;
