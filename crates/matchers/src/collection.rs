//! Collection matchers
//!
//! Three policies over an ordered sequence of elements:
//!
//! - **in order**: one matcher per element, position by position
//! - **any order**: a one-to-one assignment, found greedily
//! - **has item**: some element satisfies the matcher, elements may be reused
//!
//! None of them reorder or deduplicate the sequence they are given.

use dom::ElementView;
use tracing::trace;

use crate::description::Description;
use crate::matcher::{BoxedMatcher, Matcher, SelfDescribing};

/// Elements matched in order, one matcher per element
pub struct IsIterableContainingInOrder<E> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E> IsIterableContainingInOrder<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }
}

impl<E> SelfDescribing for IsIterableContainingInOrder<E> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable containing ")
            .append_list("[", ", ", "]", &self.matchers);
    }
}

impl<E> Matcher<[E]> for IsIterableContainingInOrder<E> {
    fn matches(&self, actual: &[E]) -> bool {
        actual.len() == self.matchers.len()
            && self
                .matchers
                .iter()
                .zip(actual)
                .all(|(matcher, item)| matcher.matches(item))
    }

    fn describe_mismatch(&self, actual: &[E], description: &mut Description) {
        let first_failure = self
            .matchers
            .iter()
            .zip(actual)
            .enumerate()
            .find(|(_, (matcher, item))| !matcher.matches(item));

        match first_failure {
            Some((index, (matcher, item))) => {
                description.append_text(&format!("item {index}: "));
                matcher.describe_mismatch(item, description);
            }
            None => {
                description.append_text(&format!(
                    "size was {}, expected {}",
                    actual.len(),
                    self.matchers.len()
                ));
            }
        }
    }
}

/// Outcome of the greedy any-order assignment
enum Assignment<'a, E> {
    Complete,
    /// An element no remaining matcher accepts
    Unmatched(&'a E),
    /// Matchers left over once every element was assigned
    Leftover(Vec<&'a BoxedMatcher<E>>),
}

/// Elements matched in any order, one-to-one
///
/// The assignment is greedy, not optimal: elements are taken in
/// sequence, and each one consumes the first still-available matcher,
/// in declaration order, that accepts it. An input that admits some
/// one-to-one assignment can still be rejected when the greedy choice
/// for an early element starves a later one.
pub struct IsIterableContainingInAnyOrder<E> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E> IsIterableContainingInAnyOrder<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    fn assign<'a>(&'a self, actual: &'a [E]) -> Assignment<'a, E> {
        let mut available: Vec<&BoxedMatcher<E>> = self.matchers.iter().collect();

        for (index, item) in actual.iter().enumerate() {
            match available.iter().position(|matcher| matcher.matches(item)) {
                Some(slot) => {
                    trace!(element = index, slot, "element assigned");
                    available.remove(slot);
                }
                None => {
                    trace!(element = index, "element left unmatched");
                    return Assignment::Unmatched(item);
                }
            }
        }

        if available.is_empty() {
            Assignment::Complete
        } else {
            Assignment::Leftover(available)
        }
    }
}

impl<E> SelfDescribing for IsIterableContainingInAnyOrder<E> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable with items ")
            .append_list("[", ", ", "]", &self.matchers)
            .append_text(" in any order");
    }
}

impl<E: ElementView> Matcher<[E]> for IsIterableContainingInAnyOrder<E> {
    fn matches(&self, actual: &[E]) -> bool {
        matches!(self.assign(actual), Assignment::Complete)
    }

    fn describe_mismatch(&self, actual: &[E], description: &mut Description) {
        match self.assign(actual) {
            Assignment::Complete => {}
            Assignment::Unmatched(item) => {
                description.append_text("Not matched: ").append_element(item);
            }
            Assignment::Leftover(matchers) => {
                description
                    .append_text("No item matches: ")
                    .append_list("", ", ", "", matchers)
                    .append_text(" in ")
                    .append_elements("[", ", ", "]", actual);
            }
        }
    }
}

/// At least one element satisfies the matcher
pub struct IsIterableContaining<E> {
    matcher: BoxedMatcher<E>,
}

impl<E> IsIterableContaining<E> {
    pub fn new(matcher: BoxedMatcher<E>) -> Self {
        Self { matcher }
    }
}

impl<E> SelfDescribing for IsIterableContaining<E> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection containing ")
            .append_description_of(&self.matcher);
    }
}

impl<E> Matcher<[E]> for IsIterableContaining<E> {
    fn matches(&self, actual: &[E]) -> bool {
        actual.iter().any(|item| self.matcher.matches(item))
    }

    fn describe_mismatch(&self, actual: &[E], description: &mut Description) {
        if actual.is_empty() {
            description.append_text("was empty");
            return;
        }

        description.append_text("mismatches were: [");
        for (index, item) in actual.iter().enumerate() {
            if index > 0 {
                description.append_text(", ");
            }
            self.matcher.describe_mismatch(item, description);
        }
        description.append_text("]");
    }
}

/// Sequence length
#[derive(Debug, Clone, Copy)]
pub struct HasSize {
    size: usize,
}

impl HasSize {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl SelfDescribing for HasSize {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("an iterable with size {}", self.size));
    }
}

impl<E> Matcher<[E]> for HasSize {
    fn matches(&self, actual: &[E]) -> bool {
        actual.len() == self.size
    }

    fn describe_mismatch(&self, actual: &[E], description: &mut Description) {
        description.append_text(&format!("iterable size was {}", actual.len()));
    }
}
