//! Property tests for mapping merge.

use proptest::prelude::*;

use scanprep::domain::services::merge_mappings;
use scanprep::domain::value_objects::DynamicValue;

use crate::strategies::mapping;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Merging a mapping over itself changes nothing.
    #[test]
    fn property_merge_with_self_is_identity(base in mapping()) {
        let mut merged = base.clone();
        merge_mappings(&mut merged, base.clone());
        prop_assert_eq!(merged, base);
    }

    /// PROPERTY: Re-applying the same override changes nothing.
    #[test]
    fn property_reapplying_override_is_idempotent(
        base in mapping(),
        overlay in mapping(),
    ) {
        let mut once = base;
        merge_mappings(&mut once, overlay.clone());
        let mut twice = once.clone();
        merge_mappings(&mut twice, overlay);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: Keys only in the base survive; non-mapping override values win.
    #[test]
    fn property_override_wins_and_base_only_keys_survive(
        base in mapping(),
        overlay in mapping(),
    ) {
        let mut merged = base.clone();
        merge_mappings(&mut merged, overlay.clone());

        for (key, value) in &base {
            if !overlay.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        for (key, value) in &overlay {
            let both_mappings = matches!(
                (base.get(key), value),
                (Some(DynamicValue::Mapping(b)), DynamicValue::Mapping(m)) if !b.is_empty() && !m.is_empty()
            );
            if !both_mappings {
                prop_assert_eq!(merged.get(key), Some(value));
            } else {
                prop_assert!(matches!(merged.get(key), Some(DynamicValue::Mapping(_))));
            }
        }
    }

    /// PROPERTY: Merge result holds exactly the union of keys.
    #[test]
    fn property_merge_key_union(base in mapping(), overlay in mapping()) {
        let mut merged = base.clone();
        merge_mappings(&mut merged, overlay.clone());

        let mut expected: Vec<&String> = base.keys().chain(overlay.keys()).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(merged.keys().collect::<Vec<_>>(), expected);
    }
}
