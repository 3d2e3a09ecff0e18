//! Value objects
//!
//! Immutable types defined by their contents: the dynamic configuration
//! tree, path expressions, validated project paths, and the shell profile.

mod dynamic_value;
mod path_expr;
mod platform;
mod safe_path;

pub use dynamic_value::{DynamicValue, Mapping, Scalar};
pub use path_expr::{PathExpression, Segment};
pub use platform::{OsFamily, PlatformProfile};
pub use safe_path::{check_path_is_safe, SafeRelativePath};
