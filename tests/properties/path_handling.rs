//! Property tests for project path validation and YAML decoding.

use std::path::Path;

use proptest::prelude::*;

use scanprep::domain::value_objects::{check_path_is_safe, SafeRelativePath};
use scanprep::infrastructure::config::parse_mapping;

fn safe_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9_.-]{0,8}")
        .unwrap()
        .prop_filter("not a parent segment", |s| s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Path checks never panic on arbitrary input.
    #[test]
    fn property_path_check_never_panics(raw in ".{0,64}") {
        let _ = check_path_is_safe(&raw);
        let _ = SafeRelativePath::new(raw);
    }

    /// PROPERTY: A `..` segment anywhere makes a path unsafe.
    #[test]
    fn property_parent_segment_is_rejected(
        before in proptest::collection::vec(safe_segment(), 0..4),
        after in proptest::collection::vec(safe_segment(), 0..4),
        leading_slash in any::<bool>(),
    ) {
        let mut segments = before;
        segments.push("..".to_string());
        segments.extend(after);
        let mut raw = segments.join("/");
        if leading_slash {
            raw.insert(0, '/');
        }

        prop_assert!(!check_path_is_safe(&raw));
        prop_assert!(SafeRelativePath::new(raw).is_err());
    }

    /// PROPERTY: Accepted paths always land under the workspace root.
    #[test]
    fn property_safe_paths_stay_under_root(
        segments in proptest::collection::vec(safe_segment(), 1..5),
        leading_slash in any::<bool>(),
    ) {
        let mut raw = segments.join("/");
        if leading_slash {
            raw.insert(0, '/');
        }
        let root = Path::new("/ws");

        let safe = SafeRelativePath::new(raw).unwrap();
        prop_assert!(safe.join_under(root).starts_with(root));
    }

    /// PROPERTY: Decoding arbitrary text never panics.
    #[test]
    fn property_parse_mapping_never_panics(content in ".{0,200}") {
        let _ = parse_mapping(&content, Path::new("fuzz.yml"));
    }
}
