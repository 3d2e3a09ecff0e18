//! YAML document loading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::value_objects::{DynamicValue, Mapping};
use crate::error::ConfigError;

/// Read `path` and decode it into a top-level mapping
pub fn load_mapping(path: &Path) -> Result<Mapping, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping = parse_mapping(&content, path)?;
    debug!(path = %path.display(), keys = mapping.len(), "loaded config document");
    Ok(mapping)
}

/// Decode YAML text. An empty document is an empty mapping; any other
/// non-mapping top level is rejected. `origin` is only used in errors.
pub fn parse_mapping(content: &str, origin: &Path) -> Result<Mapping, ConfigError> {
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(content).map_err(|source| ConfigError::Decode {
            path: origin.to_path_buf(),
            source,
        })?;
    match DynamicValue::from(value) {
        DynamicValue::Mapping(mapping) => Ok(mapping),
        value if value.is_null() => Ok(Mapping::new()),
        _ => Err(ConfigError::NotAMapping {
            path: origin.to_path_buf(),
        }),
    }
}
