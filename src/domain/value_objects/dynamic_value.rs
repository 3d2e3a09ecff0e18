//! Dynamic Value
//!
//! Schema-less tree decoded from a configuration document. The variant of a
//! node never changes after construction; callers match on it before
//! descending.

use std::collections::BTreeMap;
use std::fmt;

/// String-keyed collection of child values
pub type Mapping = BTreeMap<String, DynamicValue>;

/// Leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Textual form of a non-null scalar
    pub fn to_text(&self) -> Option<String> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::String(s) => Some(s.clone()),
        }
    }
}

/// A node of the configuration tree
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Scalar(Scalar),
    Sequence(Vec<DynamicValue>),
    Mapping(Mapping),
}

impl DynamicValue {
    pub fn null() -> Self {
        DynamicValue::Scalar(Scalar::Null)
    }

    pub fn string(s: impl Into<String>) -> Self {
        DynamicValue::Scalar(Scalar::String(s.into()))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            DynamicValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DynamicValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Scalar(Scalar::Null))
    }

    /// A mapping with at least one key
    pub fn is_non_empty_mapping(&self) -> bool {
        matches!(self, DynamicValue::Mapping(m) if !m.is_empty())
    }

    /// Variant label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicValue::Scalar(_) => "scalar",
            DynamicValue::Sequence(_) => "sequence",
            DynamicValue::Mapping(_) => "mapping",
        }
    }
}

impl From<serde_yaml_ng::Value> for DynamicValue {
    fn from(value: serde_yaml_ng::Value) -> Self {
        use serde_yaml_ng::Value;

        match value {
            Value::Null => DynamicValue::null(),
            Value::Bool(b) => DynamicValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DynamicValue::Scalar(Scalar::Int(i))
                } else if let Some(f) = n.as_f64() {
                    DynamicValue::Scalar(Scalar::Float(f))
                } else {
                    DynamicValue::string(n.to_string())
                }
            }
            Value::String(s) => DynamicValue::string(s),
            Value::Sequence(items) => {
                DynamicValue::Sequence(items.into_iter().map(DynamicValue::from).collect())
            }
            Value::Mapping(map) => {
                let mut out = Mapping::new();
                for (key, value) in map {
                    // Complex keys cannot be addressed by a path expression
                    let Some(key) = key_text(key) else {
                        continue;
                    };
                    out.insert(key, DynamicValue::from(value));
                }
                DynamicValue::Mapping(out)
            }
            Value::Tagged(tagged) => DynamicValue::from(tagged.value),
        }
    }
}

fn key_text(key: serde_yaml_ng::Value) -> Option<String> {
    use serde_yaml_ng::Value;

    match key {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => key_text(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Scalar(Scalar::Null) => write!(f, "null"),
            DynamicValue::Scalar(Scalar::String(s)) => write!(f, "{:?}", s),
            DynamicValue::Scalar(s) => match s.to_text() {
                Some(text) => write!(f, "{}", text),
                None => write!(f, "null"),
            },
            DynamicValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            DynamicValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
