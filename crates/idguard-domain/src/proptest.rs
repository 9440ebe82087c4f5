//! Property tests for normalization and the naming rule.

use crate::checks::logical_id::{TYPE_DELIMITER, check};
use crate::engine::evaluate;
use crate::normalize::clean_identifier;
use crate::report::Violation;
use crate::test_support::{exclusions, resource, template};
use proptest::prelude::*;

fn arb_escape() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x1b[0m".to_string()),
        Just("\x1b[31m".to_string()),
        Just("\x1b[1;32m".to_string()),
        "[0-9;]{0,6}".prop_map(|params| format!("\x1b[{params}m")),
    ]
}

/// Visible text with no escape character and no surrounding whitespace.
fn arb_visible() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]([A-Za-z0-9 _.-]{0,14}[A-Za-z0-9])?"
}

fn arb_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,10}"
}

fn arb_namespaced_type() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_segment(), 2..5)
}

/// Re-case ASCII letters according to `mask`.
fn recase(s: &str, mask: &[bool]) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask.get(i).copied().unwrap_or(false) {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Escapes and padding disappear; the visible text is untouched.
    #[test]
    fn normalization_keeps_visible_text(
        text in arb_visible(),
        before in arb_escape(),
        after in arb_escape(),
        pad_left in " {0,3}",
        pad_right in "[ \t]{0,3}",
    ) {
        let raw = format!("{pad_left}{before}{text}{after}{pad_right}");
        prop_assert_eq!(clean_identifier(&raw), text);
    }

    #[test]
    fn normalization_is_idempotent(raw in "(\x1b|\\[|m|[a-zA-Z0-9 ;\t])*") {
        let once = clean_identifier(&raw);
        prop_assert_eq!(clean_identifier(&once), once.clone());
    }

    /// A logical id made of the last two segments (any casing) always passes.
    #[test]
    fn concatenated_segments_are_compliant(
        segments in arb_namespaced_type(),
        prefix in "[A-Za-z]{0,8}",
        mask in prop::collection::vec(any::<bool>(), 20),
    ) {
        let resource_type = segments.join(TYPE_DELIMITER);
        let n = segments.len();
        let suffix = format!("{}{}", segments[n - 2], segments[n - 1]);
        let logical_id = format!("{prefix}{}", recase(&suffix, &mask));
        prop_assert_eq!(check(&logical_id, Some(&resource_type)), Ok(()));
    }

    /// Without a delimiter the type is invalid whatever the logical id.
    #[test]
    fn undelimited_types_are_always_invalid(
        resource_type in "[A-Za-z0-9:]{0,16}".prop_filter("no delimiter", |t| !t.contains("::")),
        logical_id in "[A-Za-z0-9]{0,16}",
    ) {
        let is_invalid = matches!(
            check(&logical_id, Some(&resource_type)),
            Err(Violation::InvalidResourceType { .. })
        );
        prop_assert!(is_invalid);
    }

    /// Exclusion is decided before the type is looked at.
    #[test]
    fn excluded_ids_are_never_checked(
        logical_id in "[A-Za-z][A-Za-z0-9]{0,12}",
        resource_type in prop::option::of("[A-Za-z:]{0,16}"),
    ) {
        let t = template(vec![resource(&logical_id, resource_type.as_deref())]);
        let eval = evaluate(&t, &exclusions(&[logical_id.as_str()]));
        prop_assert!(eval.is_compliant());
        prop_assert_eq!(eval.excluded, vec![logical_id]);
    }
}
