//! Exclusion pruning
//!
//! Deletes every path under the project directory whose `/`-separated full
//! path matches one of the configured regular expressions (unanchored
//! search). A matching directory is removed whole and not descended into.
//! The project root itself is checked too.
//!
//! Entries that cannot be inspected are skipped; a failed deletion aborts.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::PruneError;

/// Compiled exclusion patterns, in configuration order
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<(String, Regex)>,
}

impl ExclusionSet {
    /// Compile all patterns up front so a bad one fails before anything is
    /// deleted. Empty patterns are dropped: they would match every path.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PruneError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                warn!("ignoring empty exclusion pattern");
                continue;
            }
            let regex = Regex::new(pattern).map_err(|source| PruneError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push((pattern.to_string(), regex));
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// First pattern matching `path`
    pub fn first_match(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(path))
            .map(|(pattern, _)| pattern.as_str())
    }
}

/// One path removed (or, in a dry run, that would be removed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedPath {
    pub path: PathBuf,
    pub pattern: String,
    pub is_dir: bool,
}

/// Walk `root` and delete what `exclusions` matches.
///
/// With `dry_run` nothing is deleted, but matching directories are still not
/// descended into, so the report equals what a real run would remove.
pub fn prune(
    root: &Path,
    exclusions: &ExclusionSet,
    dry_run: bool,
) -> Result<Vec<PrunedPath>, PruneError> {
    let mut pruned = Vec::new();
    if exclusions.is_empty() {
        debug!(root = %root.display(), "no exclusion patterns, nothing to prune");
        return Ok(pruned);
    }
    visit(root, exclusions, dry_run, &mut pruned)?;
    Ok(pruned)
}

fn visit(
    path: &Path,
    exclusions: &ExclusionSet,
    dry_run: bool,
    pruned: &mut Vec<PrunedPath>,
) -> Result<(), PruneError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable path");
            return Ok(());
        }
    };
    let is_dir = meta.is_dir();

    if let Some(pattern) = exclusions.first_match(&to_slash(path)) {
        if !dry_run {
            remove(path, is_dir)?;
        }
        info!(path = %path.display(), pattern, dry_run, "pruned excluded path");
        pruned.push(PrunedPath {
            path: path.to_path_buf(),
            pattern: pattern.to_string(),
            is_dir,
        });
        return Ok(());
    }

    if !is_dir {
        return Ok(());
    }

    let mut children = match fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect::<Vec<_>>(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable directory");
            return Ok(());
        }
    };
    children.sort();

    for child in children {
        visit(&child, exclusions, dry_run, pruned)?;
    }
    Ok(())
}

fn remove(path: &Path, is_dir: bool) -> Result<(), PruneError> {
    let result = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| PruneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
