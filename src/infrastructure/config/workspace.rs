//! Workspace and main-config resolution
//!
//! The CLI already folds in `WORKSPACE` and `MAIN_YML_PATH`; these functions
//! only validate what arrived.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// The workspace root must be given, absolute, and an existing directory
pub fn resolve_workspace(raw: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match raw {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(ConfigError::WorkspaceNotSet),
    };
    if !path.is_absolute() {
        return Err(ConfigError::WorkspaceNotAbsolute {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ConfigError::WorkspaceNotDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// The main config must be given and point at a file
pub fn resolve_main_config(raw: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match raw {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(ConfigError::MainConfigNotSet),
    };
    if !path.is_file() {
        return Err(ConfigError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}
