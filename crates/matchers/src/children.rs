//! Child matchers
//!
//! Exactly one level deep: only the immediate element children are
//! handed to the collection matcher. Text and comments are skipped,
//! grandchildren are never seen.

use dom::ElementView;

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

pub struct HasChildren<M> {
    children_matcher: M,
}

impl<M> HasChildren<M> {
    pub fn new(children_matcher: M) -> Self {
        Self { children_matcher }
    }
}

impl<M: SelfDescribing> SelfDescribing for HasChildren<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("has children ")
            .append_description_of(&self.children_matcher);
    }
}

impl<E: ElementView, M: Matcher<[E]>> Matcher<E> for HasChildren<M> {
    fn matches(&self, actual: &E) -> bool {
        let children = actual.children();
        self.children_matcher.matches(children.as_slice())
    }

    fn describe_mismatch(&self, actual: &E, description: &mut Description) {
        let children = actual.children();
        description.append_text("children ");
        self.children_matcher
            .describe_mismatch(children.as_slice(), description);
    }
}
