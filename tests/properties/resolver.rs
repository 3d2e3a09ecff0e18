//! Property tests for path resolution.

use proptest::prelude::*;

use scanprep::domain::services::resolve;
use scanprep::domain::value_objects::DynamicValue;

use crate::strategies::{key, mapping, value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution never panics and gives the same answer twice.
    #[test]
    fn property_resolve_is_total_and_deterministic(
        root in value(),
        path in "[a-z0-9.]{0,20}",
    ) {
        let first = resolve(&path, &root);
        let second = resolve(&path, &root);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: A non-null child stored under a key resolves by that key.
    #[test]
    fn property_resolve_finds_inserted_child(
        mut root in mapping(),
        k in key(),
        child in value(),
    ) {
        root.insert(k.clone(), child.clone());
        let root = DynamicValue::Mapping(root);

        match resolve(&k, &root) {
            Some(found) => prop_assert_eq!(found, &child),
            None => prop_assert!(child.is_null()),
        }
    }

    /// PROPERTY: Nothing resolves through a scalar.
    #[test]
    fn property_scalars_have_no_children(
        text in "[ -~]{0,12}",
        path in "[a-z][a-z0-9.]{0,12}",
    ) {
        let root = DynamicValue::string(text);
        prop_assert!(resolve(&path, &root).is_none());
    }
}
