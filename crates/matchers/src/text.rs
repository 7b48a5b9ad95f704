//! String value matchers
//!
//! Feature matchers extract a string (tag, attribute value, text) and
//! hand it to one of these.

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

fn describe_was(actual: &str, description: &mut Description) {
    description.append_text("was ").append_value(actual);
}

/// Exact string equality
#[derive(Debug, Clone)]
pub struct IsEqual {
    expected: String,
}

impl SelfDescribing for IsEqual {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(self.expected.as_str());
    }
}

impl Matcher<str> for IsEqual {
    fn matches(&self, actual: &str) -> bool {
        actual == self.expected
    }

    fn describe_mismatch(&self, actual: &str, description: &mut Description) {
        describe_was(actual, description);
    }
}

/// String equality, ignoring case
#[derive(Debug, Clone)]
pub struct IsEqualIgnoringCase {
    expected: String,
}

impl SelfDescribing for IsEqualIgnoringCase {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string equal to ")
            .append_value(self.expected.as_str())
            .append_text(" ignoring case");
    }
}

impl Matcher<str> for IsEqualIgnoringCase {
    fn matches(&self, actual: &str) -> bool {
        actual.to_lowercase() == self.expected.to_lowercase()
    }

    fn describe_mismatch(&self, actual: &str, description: &mut Description) {
        describe_was(actual, description);
    }
}

/// Empty, or whitespace only
#[derive(Debug, Clone, Copy, Default)]
pub struct IsBlankString;

impl SelfDescribing for IsBlankString {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a blank string");
    }
}

impl Matcher<str> for IsBlankString {
    fn matches(&self, actual: &str) -> bool {
        dom::utils::is_blank(actual)
    }

    fn describe_mismatch(&self, actual: &str, description: &mut Description) {
        describe_was(actual, description);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    End,
    Anywhere,
}

/// Substring at a given position
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    substring: String,
    position: Position,
}

impl SelfDescribing for SubstringMatcher {
    fn describe_to(&self, description: &mut Description) {
        let relation = match self.position {
            Position::Start => "starting with",
            Position::End => "ending with",
            Position::Anywhere => "containing",
        };
        description
            .append_text("a string ")
            .append_text(relation)
            .append_text(" ")
            .append_value(self.substring.as_str());
    }
}

impl Matcher<str> for SubstringMatcher {
    fn matches(&self, actual: &str) -> bool {
        match self.position {
            Position::Start => actual.starts_with(&self.substring),
            Position::End => actual.ends_with(&self.substring),
            Position::Anywhere => actual.contains(&self.substring),
        }
    }

    fn describe_mismatch(&self, actual: &str, description: &mut Description) {
        describe_was(actual, description);
    }
}

pub fn equal_to(expected: impl Into<String>) -> IsEqual {
    IsEqual {
        expected: expected.into(),
    }
}

pub fn equal_to_ignoring_case(expected: impl Into<String>) -> IsEqualIgnoringCase {
    IsEqualIgnoringCase {
        expected: expected.into(),
    }
}

pub fn blank_string() -> IsBlankString {
    IsBlankString
}

pub fn starts_with(prefix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: prefix.into(),
        position: Position::Start,
    }
}

pub fn ends_with(suffix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: suffix.into(),
        position: Position::End,
    }
}

pub fn contains_string(substring: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: substring.into(),
        position: Position::Anywhere,
    }
}
