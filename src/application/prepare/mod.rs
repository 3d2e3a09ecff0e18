//! Prepare Module
//!
//! Readies a project for a remote scan: resolve the workspace, load and merge
//! the main and project configs, bind the deployment parameters, prune
//! excluded paths, clean the remote directories, and copy the project over.
//!
//! ## Structure
//!
//! - `options` - Inputs (`PrepareOptions`)
//! - `result` - Outputs (`PrepareReport`, `PrepareFailure`)
//! - `use_case` - Stage orchestration (`PrepareUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use scanprep::application::prepare::{PrepareOptions, PrepareUseCase};
//! use scanprep::infrastructure::ProcessRunner;
//!
//! let use_case = PrepareUseCase::new(ProcessRunner::default());
//! let report = use_case.execute(&PrepareOptions::new(workspace, main_config))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{PrepareOptions, DEFAULT_CONFIG_NAME};
pub use result::{PlannedCommand, PrepareFailure, PrepareReport};
pub use use_case::PrepareUseCase;
