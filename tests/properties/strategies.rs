//! Generators for configuration trees.

use proptest::prelude::*;

use scanprep::domain::value_objects::{DynamicValue, Mapping, Scalar};

pub fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-zA-Z0-9_]{0,6}").unwrap()
}

fn scalar() -> impl Strategy<Value = DynamicValue> {
    // Floats are left out so PartialEq stays reflexive (no NaN)
    prop_oneof![
        Just(Scalar::Null),
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        "[ -~]{0,12}".prop_map(Scalar::String),
    ]
    .prop_map(DynamicValue::Scalar)
}

pub fn value() -> impl Strategy<Value = DynamicValue> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(DynamicValue::Sequence),
            proptest::collection::btree_map(key(), inner, 0..5).prop_map(DynamicValue::Mapping),
        ]
    })
}

pub fn mapping() -> impl Strategy<Value = Mapping> {
    proptest::collection::btree_map(key(), value(), 0..6)
}
