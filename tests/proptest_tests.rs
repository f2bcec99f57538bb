// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the lookup rules against arbitrary keys, paths and
//! overlays rather than a fixed document.

use nanoconf::domain::{ConfigPath, ConfigValue, ConfigView};
use nanoconf::service::Config;
use proptest::prelude::*;

/// Segment names that never contain the separators used below.
fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}"
}

/// Builds `{s1: {s2: {... {key: leaf}}}}` from the innermost segment outwards.
fn nest(segments: &[String], key: &str, leaf: ConfigValue) -> ConfigValue {
    let mut node: ConfigValue = [(key.to_string(), leaf)].into_iter().collect();
    for segment in segments.iter().rev() {
        node = [(segment.clone(), node)].into_iter().collect();
    }
    node
}

// Any non-empty overlay is returned verbatim, whatever is stored.
proptest! {
    #[test]
    fn test_overlay_always_wins(key in segment(), stored in "\\PC*", overlay in "\\PC+") {
        let doc: ConfigValue = [(key.clone(), stored)].into_iter().collect();
        let config = Config::from_document(doc).unwrap();
        prop_assert_eq!(config.root().as_string(&key, &overlay), overlay);
    }
}

// Without an overlay, strings come back as stored.
proptest! {
    #[test]
    fn test_stored_string_round_trips(key in segment(), stored in "\\PC*") {
        let doc: ConfigValue = [(key.clone(), stored.clone())].into_iter().collect();
        let config = Config::from_document(doc).unwrap();
        prop_assert_eq!(config.root().as_string(&key, ""), stored);
    }
}

// Stored integers are returned by both integer accessors.
proptest! {
    #[test]
    fn test_integer_round_trips(key in segment(), n in prop::num::i64::ANY, fallback in prop::num::i64::ANY) {
        let doc: ConfigValue = [(key.clone(), n)].into_iter().collect();
        let config = Config::from_document(doc).unwrap();
        prop_assert_eq!(config.root().as_int(&key, "").unwrap(), n);
        prop_assert_eq!(config.root().as_int_or(&key, "", fallback), n);
        prop_assert_eq!(config.root().as_string(&key, ""), n.to_string());
    }
}

// Non-numeric text always falls back.
proptest! {
    #[test]
    fn test_non_numeric_falls_back(key in segment(), text in "[a-z ]{1,12}", fallback in prop::num::i64::ANY) {
        let doc: ConfigValue = [(key.clone(), text)].into_iter().collect();
        let config = Config::from_document(doc).unwrap();
        prop_assert_eq!(config.root().as_int_or(&key, "", fallback), fallback);
        prop_assert_eq!(config.root().as_int_or("absent-key!", "", fallback), fallback);
    }
}

// find("p1:p2") addresses the same node as find("p1").find("p2").
proptest! {
    #[test]
    fn test_find_is_associative(
        segments in prop::collection::vec(segment(), 1..6),
        split in 0usize..6,
        key in segment(),
    ) {
        let doc = nest(&segments, &key, ConfigValue::from("leaf"));
        let config = Config::from_document(doc).unwrap();

        let split = split.min(segments.len());
        let (head, tail) = segments.split_at(split);
        let whole = config.find(&segments.join(":"));
        let stepwise = config.find(&head.join(":")).find(&tail.join(":"));

        prop_assert!(whole.is_present());
        prop_assert_eq!(whole.raw(), stepwise.raw());
        prop_assert_eq!(whole.as_string(&key, ""), "leaf");
    }
}

// The separator only changes how the path string is split.
proptest! {
    #[test]
    fn test_separator_independence(
        segments in prop::collection::vec(segment(), 1..6),
        key in segment(),
    ) {
        let doc = nest(&segments, &key, ConfigValue::from(1));
        let colon = Config::from_document(doc.clone()).unwrap();
        let dotted = Config::from_document(doc).unwrap().with_separator(".");

        prop_assert_eq!(
            colon.find(&segments.join(":")).raw(),
            dotted.find(&segments.join(".")).raw()
        );
        prop_assert_eq!(
            ConfigPath::parse(&segments.join(":"), ":"),
            ConfigPath::parse(&segments.join("."), ".")
        );
    }
}

// A missing first segment always yields an absent view.
proptest! {
    #[test]
    fn test_missing_prefix_is_absent(
        segments in prop::collection::vec(segment(), 1..4),
        key in segment(),
        extra in segment(),
    ) {
        let doc = nest(&segments, &key, ConfigValue::from("leaf"));
        let config = Config::from_document(doc).unwrap();
        let path = format!("{}-missing:{}", segments[0], extra);
        let view: ConfigView<'_> = config.find(&path);

        prop_assert!(!view.is_present());
        prop_assert_eq!(view.as_string(&key, ""), "");
        prop_assert!(view.as_int(&key, "").is_err());
    }
}
