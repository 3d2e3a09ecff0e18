//! Configuration inputs
//!
//! Everything the pipeline reads before binding: the workspace root, the two
//! YAML documents, and the search for the project-level file.

mod discovery;
mod workspace;
mod yaml;

pub use discovery::find_config_file;
pub use workspace::{resolve_main_config, resolve_workspace};
pub use yaml::{load_mapping, parse_mapping};
