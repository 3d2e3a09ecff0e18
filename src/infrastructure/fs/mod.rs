//! Local file system operations

mod prune;

pub use prune::{prune, ExclusionSet, PrunedPath};
