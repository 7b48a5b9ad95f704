//! Generic matcher combinators
//!
//! AND, OR, NOT and the always-true matcher. They work for any value
//! type, so the same `all_of` combines element matchers, string
//! matchers and collection matchers.

use std::marker::PhantomData;

use crate::description::Description;
use crate::matcher::{BoxedMatcher, Matcher, SelfDescribing};

/// Logical AND
///
/// Mismatch reports the first failing matcher: its description, then
/// its mismatch.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<BoxedMatcher<T>>,
}

impl<T: ?Sized> AllOf<T> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<T>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> SelfDescribing for AllOf<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " and ", ")", &self.matchers);
    }
}

impl<T: ?Sized> Matcher<T> for AllOf<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().all(|matcher| matcher.matches(actual))
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        if let Some(failed) = self.matchers.iter().find(|m| !m.matches(actual)) {
            description.append_description_of(failed).append_text(" ");
            failed.describe_mismatch(actual, description);
        }
    }
}

/// Logical OR
///
/// Every alternative failed when this reports, so the mismatch of the
/// first alternative stands for all of them.
pub struct AnyOf<T: ?Sized> {
    matchers: Vec<BoxedMatcher<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<T>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> SelfDescribing for AnyOf<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " or ", ")", &self.matchers);
    }
}

impl<T: ?Sized> Matcher<T> for AnyOf<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(actual))
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        match self.matchers.first() {
            Some(first) => first.describe_mismatch(actual, description),
            None => {
                description.append_text("had no alternative to match");
            }
        }
    }
}

/// Always matches
#[derive(Debug, Clone, Copy, Default)]
pub struct IsAnything;

impl SelfDescribing for IsAnything {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("ANYTHING");
    }
}

impl<T: ?Sized> Matcher<T> for IsAnything {
    fn matches(&self, _actual: &T) -> bool {
        true
    }

    fn describe_mismatch(&self, _actual: &T, _description: &mut Description) {}
}

/// Logical NOT
pub struct IsNot<T: ?Sized, M> {
    matcher: M,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized, M: SelfDescribing> SelfDescribing for IsNot<T, M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("not ")
            .append_description_of(&self.matcher);
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for IsNot<T, M> {
    fn matches(&self, actual: &T) -> bool {
        !self.matcher.matches(actual)
    }

    fn describe_mismatch(&self, _actual: &T, description: &mut Description) {
        description
            .append_text("was ")
            .append_description_of(&self.matcher);
    }
}

pub fn all_of<T: ?Sized>(matchers: impl IntoIterator<Item = BoxedMatcher<T>>) -> AllOf<T> {
    AllOf::new(matchers)
}

pub fn any_of<T: ?Sized>(matchers: impl IntoIterator<Item = BoxedMatcher<T>>) -> AnyOf<T> {
    AnyOf::new(matchers)
}

pub fn anything() -> IsAnything {
    IsAnything
}

pub fn not<T: ?Sized, M: Matcher<T>>(matcher: M) -> IsNot<T, M> {
    IsNot {
        matcher,
        _value: PhantomData,
    }
}
