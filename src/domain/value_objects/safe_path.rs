//! Safe relative path
//!
//! A project path taken from configuration, validated so it cannot climb out
//! of the workspace:
//! - No `..` segment at the start, the end, or between separators
//! - Leading separators are ignored; the workspace root is always the base

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

fn is_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}

/// `false` when any separator-delimited segment of `path` is `..`
pub fn check_path_is_safe(path: &str) -> bool {
    !path.split(is_separator).any(|segment| segment == "..")
}

/// A validated path relative to the workspace root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeRelativePath(String);

impl SafeRelativePath {
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        if !check_path_is_safe(&raw) {
            return Err(ConfigError::UnsafePath { path: raw });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join onto `root`, treating a leading separator as relative.
    ///
    /// Empty and `.` segments are dropped, so `.` yields `root` itself and
    /// `./app/` yields `root/app`.
    pub fn join_under(&self, root: &Path) -> PathBuf {
        let mut joined = root.to_path_buf();
        for segment in self.0.split(is_separator) {
            if !segment.is_empty() && segment != "." {
                joined.push(segment);
            }
        }
        joined
    }
}

impl fmt::Display for SafeRelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeRelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
