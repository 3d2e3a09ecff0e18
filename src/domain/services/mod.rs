//! Domain Services
//!
//! Pure logic over the dynamic configuration tree: path resolution, mapping
//! merge, and struct binding. None of these touch the file system.

mod binder;
mod mapping_merger;
mod resolver;

pub use binder::{bind, bind_value, Bindable, BoundValue, FieldBinding, FieldShape};
pub use mapping_merger::{merge_mappings, merge_mappings_with_overrides, OverrideInfo};
pub use resolver::{resolve, resolve_expr};
