//! Feature matchers
//!
//! Each one pulls a single feature out of an element (tag, attribute,
//! text) and lets a nested value matcher decide. Mismatches name the
//! feature, then the nested mismatch: `tag was "span"`.

use dom::ElementView;

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

fn describe_feature_mismatch<M: Matcher<str>>(
    feature_name: &str,
    value_matcher: &M,
    value: &str,
    description: &mut Description,
) {
    description.append_text(feature_name).append_text(" ");
    value_matcher.describe_mismatch(value, description);
}

/// Tag name matcher
pub struct HasTag<M> {
    value_matcher: M,
}

impl<M: Matcher<str>> HasTag<M> {
    pub fn new(value_matcher: M) -> Self {
        Self { value_matcher }
    }
}

impl<M: Matcher<str>> SelfDescribing for HasTag<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("has tag ")
            .append_description_of(&self.value_matcher);
    }
}

impl<E: ElementView, M: Matcher<str>> Matcher<E> for HasTag<M> {
    fn matches(&self, actual: &E) -> bool {
        self.value_matcher.matches(actual.tag_name())
    }

    fn describe_mismatch(&self, actual: &E, description: &mut Description) {
        describe_feature_mismatch("tag", &self.value_matcher, actual.tag_name(), description);
    }
}

/// Attribute presence matcher; the name is compared exactly
#[derive(Debug, Clone)]
pub struct HasAttribute {
    name: String,
}

impl HasAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SelfDescribing for HasAttribute {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("has attribute ")
            .append_value(self.name.as_str());
    }
}

impl<E: ElementView> Matcher<E> for HasAttribute {
    fn matches(&self, actual: &E) -> bool {
        actual.has_attribute(&self.name)
    }

    fn describe_mismatch(&self, _actual: &E, description: &mut Description) {
        description
            .append_text("no attribute ")
            .append_value(self.name.as_str());
    }
}

/// Attribute value matcher
///
/// A missing attribute reads as the empty string, so the nested matcher
/// still decides.
pub struct HasAttributeValue<M> {
    name: String,
    value_matcher: M,
}

impl<M: Matcher<str>> HasAttributeValue<M> {
    pub fn new(name: impl Into<String>, value_matcher: M) -> Self {
        Self {
            name: name.into(),
            value_matcher,
        }
    }
}

impl<M: Matcher<str>> SelfDescribing for HasAttributeValue<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("has attribute ")
            .append_value(self.name.as_str())
            .append_text(" with value ")
            .append_description_of(&self.value_matcher);
    }
}

impl<E: ElementView, M: Matcher<str>> Matcher<E> for HasAttributeValue<M> {
    fn matches(&self, actual: &E) -> bool {
        self.value_matcher.matches(&actual.attribute(&self.name))
    }

    fn describe_mismatch(&self, actual: &E, description: &mut Description) {
        let feature_name = format!("{:?} value", self.name);
        describe_feature_mismatch(
            &feature_name,
            &self.value_matcher,
            &actual.attribute(&self.name),
            description,
        );
    }
}

/// Text content matcher, over all descendant text
pub struct HasContentText<M> {
    value_matcher: M,
}

impl<M: Matcher<str>> HasContentText<M> {
    pub fn new(value_matcher: M) -> Self {
        Self { value_matcher }
    }
}

impl<M: Matcher<str>> SelfDescribing for HasContentText<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("has content text ")
            .append_description_of(&self.value_matcher);
    }
}

impl<E: ElementView, M: Matcher<str>> Matcher<E> for HasContentText<M> {
    fn matches(&self, actual: &E) -> bool {
        self.value_matcher.matches(&actual.text_content())
    }

    fn describe_mismatch(&self, actual: &E, description: &mut Description) {
        describe_feature_mismatch(
            "text",
            &self.value_matcher,
            &actual.text_content(),
            description,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{equal_to, equal_to_ignoring_case};
    use dom::{Document, Element};

    fn element(markup: &str) -> Element {
        Document::parse_fragment(markup).first_element().unwrap()
    }

    fn mismatch<M: Matcher<Element>>(matcher: &M, actual: &Element) -> String {
        assert!(!matcher.matches(actual));
        let mut description = Description::new();
        matcher.describe_mismatch(actual, &mut description);
        description.into_string()
    }

    #[test]
    fn test_has_tag() {
        let span = element("<span></span>");

        assert!(HasTag::new(equal_to("span")).matches(&span));
        assert!(HasTag::new(equal_to_ignoring_case("SPAN")).matches(&span));
        assert_eq!(mismatch(&HasTag::new(equal_to("div")), &span), r#"tag was "span""#);
    }

    #[test]
    fn test_attribute_value_reads_missing_as_empty() {
        let input = element(r#"<input value="submit">"#);
        let matcher = HasAttributeValue::new("name", equal_to(""));

        assert!(matcher.matches(&input));
        assert_eq!(
            mismatch(&HasAttributeValue::new("name", equal_to("submit")), &input),
            r#""name" value was """#
        );
    }

    #[test]
    fn test_attribute_presence_is_exact() {
        let input = element(r#"<input data-role="x">"#);

        assert!(HasAttribute::new("data-role").matches(&input));
        assert!(!HasAttribute::new("data").matches(&input));
        assert_eq!(mismatch(&HasAttribute::new("data"), &input), r#"no attribute "data""#);
    }

    #[test]
    fn test_content_text_spans_descendants() {
        let p = element("<p>Hello <em>big</em> world</p>");

        assert!(HasContentText::new(equal_to("Hello big world")).matches(&p));
        assert_eq!(
            Description::of(&HasContentText::new(equal_to("x"))),
            r#"has content text "x""#
        );
    }
}
