//! Mapping merger
//!
//! Combines two configuration mappings in place:
//! - Key only in the overlay: inserted as-is
//! - Both values are non-empty mappings: merged recursively
//! - Anything else (scalars, sequences, mismatched kinds, null or empty
//!   mappings): the overlay value replaces the base value wholesale
//!
//! Sequences are never merged element-wise. Merging is total; it cannot fail.

use crate::domain::value_objects::{DynamicValue, Mapping};

/// A key whose base value was replaced by the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideInfo {
    /// Dotted path of the replaced key
    pub path: String,
    /// Variant of the value that was replaced
    pub from_kind: &'static str,
    /// Variant of the value that replaced it
    pub to_kind: &'static str,
}

/// Merge `overlay` into `base`. Ownership of overlay subtrees moves to `base`.
pub fn merge_mappings(base: &mut Mapping, overlay: Mapping) {
    merge_into(base, overlay, "", &mut None);
}

/// Same as [`merge_mappings`], also reporting every replaced key.
pub fn merge_mappings_with_overrides(base: &mut Mapping, overlay: Mapping) -> Vec<OverrideInfo> {
    let mut overrides = Vec::new();
    merge_into(base, overlay, "", &mut Some(&mut overrides));
    overrides
}

fn merge_into(
    base: &mut Mapping,
    overlay: Mapping,
    prefix: &str,
    overrides: &mut Option<&mut Vec<OverrideInfo>>,
) {
    for (key, value) in overlay {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match base.get_mut(&key) {
            None => {
                base.insert(key, value);
            }
            Some(existing) if existing.is_non_empty_mapping() && value.is_non_empty_mapping() => {
                if let (DynamicValue::Mapping(existing), DynamicValue::Mapping(incoming)) =
                    (existing, value)
                {
                    merge_into(existing, incoming, &path, overrides);
                }
            }
            Some(existing) => {
                if let Some(list) = overrides.as_deref_mut() {
                    list.push(OverrideInfo {
                        path,
                        from_kind: existing.kind(),
                        to_kind: value.kind(),
                    });
                }
                *existing = value;
            }
        }
    }
}
