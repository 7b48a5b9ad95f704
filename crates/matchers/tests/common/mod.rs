#![allow(dead_code)]

use std::any::Any;

use dom::{Document, Element};
use dom_matchers::{check, Description, Matcher};

pub struct UnknownType;

/// Root of a parsed fragment, the `<html>` wrapper around the markup
pub fn html(markup: &str) -> Element {
    Document::parse_fragment(markup).root_element()
}

/// First element of a markup fragment
pub fn element(markup: &str) -> Element {
    Document::parse_fragment(markup)
        .first_element()
        .expect("fragment has no element")
}

pub fn assert_matches<T: ?Sized, M: Matcher<T> + ?Sized>(message: &str, matcher: &M, actual: &T) {
    assert!(matcher.matches(actual), "{message}");
}

pub fn assert_does_not_match<T: ?Sized, M: Matcher<T> + ?Sized>(
    message: &str,
    matcher: &M,
    actual: &T,
) {
    assert!(!matcher.matches(actual), "{message}");
}

pub fn assert_description<M: Matcher<Element> + ?Sized>(expected: &str, matcher: &M) {
    assert_eq!(Description::of(matcher), expected, "description");
}

pub fn assert_mismatch_description<T: ?Sized, M: Matcher<T> + ?Sized>(
    expected: &str,
    matcher: &M,
    actual: &T,
) {
    let report = check(actual, matcher);
    assert!(!report.matched, "matches item");
    assert_eq!(report.mismatch.as_deref(), Some(expected), "mismatch description");
}

/// Null and values of a foreign type are clean non-matches
pub fn assert_total<M: Matcher<Element> + ?Sized>(matcher: &M) {
    assert!(!matcher.matches_any(None));
    let unknown = UnknownType;
    assert!(!matcher.matches_any(Some(&unknown as &dyn Any)));

    let mut description = Description::new();
    matcher.describe_mismatch_any(None, &mut description);
    assert_eq!(description.as_str(), "was null");

    let mut description = Description::new();
    matcher.describe_mismatch_any(Some(&unknown as &dyn Any), &mut description);
    assert_eq!(description.as_str(), "was a value of an unexpected type");
}
