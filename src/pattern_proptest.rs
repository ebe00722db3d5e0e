//! Property-based tests for pattern parsing and the visitation filter.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::operations::ChildDir;
    use crate::pattern::{Polarity, SearchPattern};
    use crate::traversal::should_visit;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    fn child(name: &str, is_symlink: bool) -> ChildDir {
        ChildDir {
            name: name.to_string(),
            path: PathBuf::from("/top").join(name),
            is_symlink,
        }
    }

    // ============================================================================
    // SearchPattern property tests
    // ============================================================================

    proptest! {
        /// Property: the text form survives a parse, polarity included
        #[test]
        fn parse_then_display_is_identity(
            negated in any::<bool>(),
            glob in "[A-Za-z0-9_]{1,8}(/(\\*\\*|\\*|[A-Za-z0-9_]{1,8})){0,3}",
        ) {
            let text = if negated { format!("!{}", glob) } else { glob.clone() };
            let pattern = SearchPattern::parse(&text).unwrap();
            prop_assert_eq!(pattern.to_string(), text);
            prop_assert_eq!(pattern.glob(), glob.as_str());
            let expected = if negated { Polarity::Excluded } else { Polarity::Required };
            prop_assert_eq!(pattern.polarity(), expected);
        }

        /// Property: only a leading `!` negates
        #[test]
        fn inner_bang_does_not_negate(prefix in "[a-z]{1,8}", suffix in "[a-z]{0,8}") {
            let pattern = SearchPattern::parse(&format!("{}!{}", prefix, suffix)).unwrap();
            prop_assert!(pattern.is_required());
        }
    }

    // ============================================================================
    // should_visit property tests
    // ============================================================================

    proptest! {
        /// Property: a name containing `test` is never visited
        #[test]
        fn names_containing_test_are_skipped(prefix in "[a-z_]{0,6}", suffix in "[a-z_]{0,6}") {
            let name = format!("{}test{}", prefix, suffix);
            prop_assert!(!should_visit(&child(&name, false), None));
        }

        /// Property: a name containing a dot is never visited
        #[test]
        fn dotted_names_are_skipped(prefix in "[a-z]{0,6}", suffix in "[a-z]{0,6}") {
            let name = format!("{}.{}", prefix, suffix);
            prop_assert!(!should_visit(&child(&name, false), None));
        }

        /// Property: plain names are visited unless they are symlinks or the
        /// output directory
        #[test]
        fn plain_names_visited_unless_symlink_or_out(name in "[a-z_]{1,12}", is_symlink in any::<bool>()) {
            prop_assume!(!name.contains("test"));
            prop_assert_eq!(should_visit(&child(&name, is_symlink), None), !is_symlink);

            let out = Path::new("/top").join(&name);
            prop_assert!(!should_visit(&child(&name, false), Some(out.as_path())));
        }
    }
}
