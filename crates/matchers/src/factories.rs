//! Factory functions
//!
//! The public vocabulary. Each function only assembles a matcher tree
//! over the default `Element` view and CSS engine; nothing is evaluated
//! until the matcher is asked.
//!
//! ```ignore
//! let page = Document::parse(html).root_element();
//! assert_that(&page, &has_selector_with("ul.menu > li", vec![
//!     an_element(vec![has_class_name("active"), has_text("Home")]),
//! ]));
//! ```

use dom::Element;

use crate::children::HasChildren;
use crate::collection::{
    HasSize, IsIterableContaining, IsIterableContainingInAnyOrder, IsIterableContainingInOrder,
};
use crate::combinators::{AllOf, AnyOf};
use crate::feature::{HasAttribute, HasAttributeValue, HasContentText, HasTag};
use crate::matcher::{BoxedMatcher, Matcher};
use crate::selector::{HasNoSelector, HasSelector, HasUniqueSelector};
use crate::text::{
    blank_string, contains_string, ends_with, equal_to, equal_to_ignoring_case, starts_with,
};

/// Matcher over one element
pub type ElementMatcher = BoxedMatcher<Element>;

/// Matcher over a sequence of elements
pub type ElementsMatcher = BoxedMatcher<[Element]>;

/// The selector picks out at least one element
pub fn has_selector(selector: &str) -> ElementMatcher {
    Box::new(HasSelector::new(selector))
}

/// The selector picks out elements that, in any order, include a match
/// for each of the given matchers. Same as
/// `has_selector_matching(selector, includes(subjects))`.
pub fn has_selector_with(
    selector: &str,
    subjects: impl IntoIterator<Item = ElementMatcher>,
) -> ElementMatcher {
    has_selector_matching(selector, includes(subjects))
}

/// The selector picks out elements that satisfy a collection matcher
pub fn has_selector_matching(
    selector: &str,
    subjects: impl Matcher<[Element]> + 'static,
) -> ElementMatcher {
    Box::new(HasSelector::with_subjects(selector, Box::new(subjects)))
}

/// The selection has this many elements
pub fn has_size(size: usize) -> ElementsMatcher {
    Box::new(HasSize::new(size))
}

/// The selector picks out exactly one element
pub fn has_unique_selector(selector: &str) -> ElementMatcher {
    Box::new(HasUniqueSelector::new(selector))
}

/// The selector picks out exactly one element, and it matches `subject`
pub fn has_unique_selector_matching(
    selector: &str,
    subject: impl Matcher<Element> + 'static,
) -> ElementMatcher {
    Box::new(HasUniqueSelector::with_subject(selector, Box::new(subject)))
}

/// The selector picks out exactly one element, and it matches all of
/// `subjects`. Same as `has_unique_selector_matching(selector, an_element(subjects))`.
pub fn has_unique_selector_with(
    selector: &str,
    subjects: impl IntoIterator<Item = ElementMatcher>,
) -> ElementMatcher {
    has_unique_selector_matching(selector, an_element(subjects))
}

/// The selector picks out nothing
pub fn has_no_selector(selector: &str) -> ElementMatcher {
    Box::new(HasNoSelector::new(selector))
}

/// Elements matched in order, one matcher per element, same count
pub fn contains(matchers: impl IntoIterator<Item = ElementMatcher>) -> ElementsMatcher {
    Box::new(IsIterableContainingInOrder::new(matchers))
}

/// Elements matched one-to-one in any order, same count
///
/// The assignment is greedy in element order; see
/// [`IsIterableContainingInAnyOrder`].
pub fn contains_in_any_order(
    matchers: impl IntoIterator<Item = ElementMatcher>,
) -> ElementsMatcher {
    Box::new(IsIterableContainingInAnyOrder::new(matchers))
}

/// Each matcher is satisfied by at least one element, in any order
pub fn includes(matchers: impl IntoIterator<Item = ElementMatcher>) -> ElementsMatcher {
    Box::new(AllOf::new(matchers.into_iter().map(|matcher| {
        Box::new(IsIterableContaining::new(matcher)) as ElementsMatcher
    })))
}

/// Tag name, ignoring case
pub fn has_tag(tag_name: &str) -> ElementMatcher {
    has_tag_matching(equal_to_ignoring_case(tag_name))
}

pub fn has_tag_matching(value_matcher: impl Matcher<str> + 'static) -> ElementMatcher {
    Box::new(HasTag::new(value_matcher))
}

/// Text content equals `text` exactly
pub fn has_text(text: &str) -> ElementMatcher {
    has_text_matching(equal_to(text))
}

pub fn has_text_matching(content_matcher: impl Matcher<str> + 'static) -> ElementMatcher {
    Box::new(HasContentText::new(content_matcher))
}

/// Text content is empty or whitespace
pub fn has_blank_text() -> ElementMatcher {
    has_text_matching(blank_string())
}

/// The attribute is present, whatever its value
pub fn has_attribute(name: &str) -> ElementMatcher {
    Box::new(HasAttribute::new(name))
}

pub fn has_attribute_value(name: &str, value: &str) -> ElementMatcher {
    has_attribute_matching(name, equal_to(value))
}

pub fn has_attribute_matching(
    name: &str,
    value_matcher: impl Matcher<str> + 'static,
) -> ElementMatcher {
    Box::new(HasAttributeValue::new(name, value_matcher))
}

pub fn has_name(name: &str) -> ElementMatcher {
    has_attribute_value("name", name)
}

pub fn has_id(id: &str) -> ElementMatcher {
    has_attribute_value("id", id)
}

/// `class_name` is one of the element's classes
///
/// Token match, not substring: "text" is found in "bold text strong"
/// but not in "textlongtext".
pub fn has_class_name(class_name: &str) -> ElementMatcher {
    let tokens: Vec<BoxedMatcher<str>> = vec![
        Box::new(equal_to(class_name)),
        Box::new(starts_with(format!("{class_name} "))),
        Box::new(ends_with(format!(" {class_name}"))),
        Box::new(contains_string(format!(" {class_name} "))),
    ];
    has_attribute_matching("class", AnyOf::new(tokens))
}

pub fn is_selected() -> ElementMatcher {
    has_attribute("selected")
}

pub fn is_read_only() -> ElementMatcher {
    has_attribute("readonly")
}

pub fn is_checked() -> ElementMatcher {
    has_attribute("checked")
}

pub fn is_disabled() -> ElementMatcher {
    has_attribute("disabled")
}

/// Immediate children matched in order, one matcher per child
pub fn has_children(matchers: impl IntoIterator<Item = ElementMatcher>) -> ElementMatcher {
    has_children_matching(contains(matchers))
}

pub fn has_children_matching(
    children_matcher: impl Matcher<[Element]> + 'static,
) -> ElementMatcher {
    Box::new(HasChildren::new(children_matcher))
}

/// At least one immediate child matches
pub fn has_child(child_matcher: impl Matcher<Element> + 'static) -> ElementMatcher {
    has_children_matching(includes([Box::new(child_matcher) as ElementMatcher]))
}

/// All of the matchers accept the element
pub fn an_element(matchers: impl IntoIterator<Item = ElementMatcher>) -> ElementMatcher {
    Box::new(AllOf::new(matchers))
}
