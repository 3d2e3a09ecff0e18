//! Project config discovery
//!
//! The project-level file may sit anywhere under the workspace. The walk is
//! depth-first with entries sorted by file name, and the first regular file
//! whose name matches wins. Hidden and ignored files are not skipped.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::ConfigError;

pub fn find_config_file(root: &Path, name: &str) -> Result<PathBuf, ConfigError> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry during config search");
                continue;
            }
        };
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && entry.file_name() == name {
            debug!(path = %entry.path().display(), "found project config");
            return Ok(entry.into_path());
        }
    }

    Err(ConfigError::ProjectConfigMissing {
        name: name.to_string(),
        root: root.to_path_buf(),
    })
}
