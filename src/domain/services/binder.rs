//! Struct binder
//!
//! Projects a merged configuration mapping onto a typed struct through an
//! explicit table of `(name, path, shape, setter)` entries. No reflection is
//! involved: each bindable type lists its own fields.
//!
//! Binding is best-effort:
//! - an absent path leaves the field at its default
//! - a value whose kind does not match the declared shape is ignored
//! - a sequence element that is not a scalar fails the whole bind
//!
//! Required-field and business checks happen after binding, in the caller.

use crate::domain::value_objects::{DynamicValue, Mapping, PathExpression, Scalar};
use crate::error::ConfigError;

use super::resolver::resolve_expr;

/// Declared shape of a bound field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    String,
    Bool,
    StringList,
}

/// Value handed to a field setter, already converted to the declared shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    String(String),
    Bool(bool),
    StringList(Vec<String>),
}

/// One annotated destination field of `T`
pub struct FieldBinding<T> {
    pub name: &'static str,
    pub path: &'static str,
    pub shape: FieldShape,
    pub apply: fn(&mut T, BoundValue),
}

/// A struct that can be populated by [`bind`]
///
/// Fields without a binding are derived later by the caller.
pub trait Bindable: Default {
    fn bindings() -> Vec<FieldBinding<Self>>;
}

/// Bind `source` onto a fresh `T`, in field-declaration order.
pub fn bind<T: Bindable>(source: &Mapping) -> Result<T, ConfigError> {
    let root = DynamicValue::Mapping(source.clone());
    bind_value(&root)
}

/// Bind from a root node that is expected to be a mapping.
pub fn bind_value<T: Bindable>(root: &DynamicValue) -> Result<T, ConfigError> {
    let mut target = T::default();

    for binding in T::bindings() {
        let path = PathExpression::parse(binding.path);
        let Some(found) = resolve_expr(&path, root) else {
            tracing::debug!(field = binding.name, path = binding.path, "not set");
            continue;
        };

        match convert(binding.path, binding.shape, found)? {
            Some(value) => (binding.apply)(&mut target, value),
            None => {
                tracing::debug!(
                    field = binding.name,
                    path = binding.path,
                    kind = found.kind(),
                    "shape mismatch, keeping default"
                );
            }
        }
    }

    Ok(target)
}

/// `Ok(None)` means the value is ignored because its kind does not match.
fn convert(
    path: &'static str,
    shape: FieldShape,
    value: &DynamicValue,
) -> Result<Option<BoundValue>, ConfigError> {
    let bound = match (shape, value) {
        (FieldShape::String, DynamicValue::Scalar(Scalar::String(s))) => {
            Some(BoundValue::String(s.clone()))
        }
        (FieldShape::Bool, DynamicValue::Scalar(Scalar::Bool(b))) => Some(BoundValue::Bool(*b)),
        (FieldShape::StringList, DynamicValue::Sequence(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let text = item
                    .as_scalar()
                    .and_then(Scalar::to_text)
                    .ok_or(ConfigError::InvalidElement { field: path, index })?;
                out.push(text);
            }
            Some(BoundValue::StringList(out))
        }
        _ => None,
    };
    Ok(bound)
}
