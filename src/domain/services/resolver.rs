//! Path Resolver
//!
//! Walks a [`DynamicValue`] tree along a [`PathExpression`]. Every step checks
//! the node kind before dereferencing, so irregular documents simply produce
//! `None`.

use crate::domain::value_objects::{DynamicValue, PathExpression};

/// Resolve `path` against `root`.
///
/// Returns `None` when the path has no segments, when any step misses, or
/// when the addressed node is `null`. Partial results are never returned.
pub fn resolve<'a>(path: &str, root: &'a DynamicValue) -> Option<&'a DynamicValue> {
    resolve_expr(&PathExpression::parse(path), root)
}

/// Resolve an already-parsed expression.
pub fn resolve_expr<'a>(path: &PathExpression, root: &'a DynamicValue) -> Option<&'a DynamicValue> {
    if path.is_empty() {
        return None;
    }

    let mut current = root;
    for segment in path.segments() {
        current = match current {
            DynamicValue::Mapping(map) => map.get(segment.as_key())?,
            DynamicValue::Sequence(items) => items.get(segment.as_index()?)?,
            DynamicValue::Scalar(_) => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}
