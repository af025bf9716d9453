//! Property-based tests for name validation, similarity, and splitting.

use proptest::prelude::*;

use crier::{
    classify, similar_chars, similar_percent, split_group_action, validate_name, DispatchTarget,
    HandlerRef, Registry, STATUS_OK,
};

proptest! {
    /// Whitespace anywhere in a name is rejected in both grammar modes.
    #[test]
    fn validator_rejects_whitespace(name in ".*[ \t\n].*") {
        prop_assert!(validate_name(&name, false).is_err());
        prop_assert!(validate_name(&name, true).is_err());
    }

    /// The plain grammar (letter, then letters/digits/dash/underscore) is
    /// accepted in both modes.
    #[test]
    fn validator_accepts_plain_names(name in "[a-zA-Z][a-zA-Z0-9_-]{0,12}") {
        prop_assert!(validate_name(&name, false).is_ok());
        prop_assert!(validate_name(&name, true).is_ok());
    }

    /// Similarity percentages stay within 0..=100.
    #[test]
    fn similarity_is_bounded(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let pct = similar_percent(&a, &b);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    /// Matched characters never exceed the shorter string.
    #[test]
    fn similarity_chars_bounded_by_shorter(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        prop_assert!(similar_chars(&a, &b) <= a.len().min(b.len()));
    }

    /// A name is always 100% similar to itself.
    #[test]
    fn similarity_of_identical_is_total(a in "[a-z]{1,12}") {
        prop_assert_eq!(similar_percent(&a, &a), 100.0);
    }

    /// Names without the delimiter pass through whole, with no action.
    #[test]
    fn split_without_delimiter_is_identity(name in "[a-z]{1,12}") {
        let (group, action) = split_group_action(&name, '/');
        prop_assert_eq!(group, name);
        prop_assert_eq!(action, "");
    }

    /// Multi-segment names resolve to the final two segments.
    #[test]
    fn split_keeps_final_segments(segments in prop::collection::vec("[a-z]{1,6}", 2..6)) {
        let raw = segments.join("/");
        let (group, action) = split_group_action(&raw, '/');
        prop_assert_eq!(&group, &segments[segments.len() - 2]);
        prop_assert_eq!(&action, &segments[segments.len() - 1]);
    }

    /// A registered command always classifies as itself, pre-split.
    #[test]
    fn registered_commands_classify(name in "[a-z][a-z0-9_-]{0,10}") {
        let mut registry = Registry::new();
        registry
            .register_command(&name, HandlerRef::from_simple_fn(|| Ok(STATUS_OK)), None)
            .unwrap();
        prop_assert_eq!(
            classify(&registry, &name, '/'),
            DispatchTarget::Command(name.clone())
        );
    }
}
