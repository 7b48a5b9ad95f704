//! Selector matchers
//!
//! Existence, uniqueness and absence of the elements a selector picks
//! out among the descendants of the matched element. The selection itself
//! comes from a `SelectorEngine`; these matchers only judge its result.
//!
//! An engine failure (say, a malformed selector) is not a mismatch. It
//! aborts the evaluation with the engine's error, like any other broken
//! collaborator would.

use dom::{CssSelectorEngine, Element, ElementView, SelectorEngine};

use crate::combinators::IsAnything;
use crate::description::Description;
use crate::matcher::{BoxedMatcher, Matcher, SelfDescribing};

fn select<Q: SelectorEngine>(engine: &Q, root: &Q::Element, selector: &str) -> Vec<Q::Element> {
    engine
        .query_all(root, selector)
        .unwrap_or_else(|err| panic!("{err}"))
}

/// At least one element is selected; optionally, the selection matches
pub struct HasSelector<Q: SelectorEngine = CssSelectorEngine> {
    engine: Q,
    selector: String,
    subjects_matcher: Option<BoxedMatcher<[Q::Element]>>,
}

impl HasSelector<CssSelectorEngine> {
    pub fn new(selector: impl Into<String>) -> Self {
        Self::with_engine(CssSelectorEngine, selector)
    }

    pub fn with_subjects(
        selector: impl Into<String>,
        subjects_matcher: BoxedMatcher<[Element]>,
    ) -> Self {
        Self::new(selector).subjects(subjects_matcher)
    }
}

impl<Q: SelectorEngine> HasSelector<Q> {
    pub fn with_engine(engine: Q, selector: impl Into<String>) -> Self {
        Self {
            engine,
            selector: selector.into(),
            subjects_matcher: None,
        }
    }

    /// Require the whole selection to satisfy a collection matcher
    pub fn subjects(mut self, subjects_matcher: BoxedMatcher<[Q::Element]>) -> Self {
        self.subjects_matcher = Some(subjects_matcher);
        self
    }
}

impl<Q: SelectorEngine> SelfDescribing for HasSelector<Q> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("has selector \"{}\"", self.selector));
        if let Some(subjects_matcher) = &self.subjects_matcher {
            description
                .append_text(" ")
                .append_description_of(subjects_matcher);
        }
    }
}

impl<Q: SelectorEngine> Matcher<Q::Element> for HasSelector<Q> {
    fn matches(&self, actual: &Q::Element) -> bool {
        let selected = select(&self.engine, actual, &self.selector);
        if selected.is_empty() {
            return false;
        }
        self.subjects_matcher
            .as_ref()
            .map_or(true, |subjects| subjects.matches(selected.as_slice()))
    }

    fn describe_mismatch(&self, actual: &Q::Element, description: &mut Description) {
        let selected = select(&self.engine, actual, &self.selector);
        if selected.is_empty() {
            description.append_text(&format!("no selector \"{}\"", self.selector));
            return;
        }
        if let Some(subjects_matcher) = &self.subjects_matcher {
            description.append_text(&self.selector).append_text(" ");
            subjects_matcher.describe_mismatch(selected.as_slice(), description);
        }
    }
}

/// Exactly one element is selected, and it matches the subject matcher
pub struct HasUniqueSelector<Q: SelectorEngine = CssSelectorEngine> {
    engine: Q,
    selector: String,
    subject_matcher: BoxedMatcher<Q::Element>,
}

impl HasUniqueSelector<CssSelectorEngine> {
    pub fn new(selector: impl Into<String>) -> Self {
        Self::with_engine(CssSelectorEngine, selector)
    }

    pub fn with_subject(
        selector: impl Into<String>,
        subject_matcher: BoxedMatcher<Element>,
    ) -> Self {
        Self::new(selector).subject(subject_matcher)
    }
}

impl<Q: SelectorEngine> HasUniqueSelector<Q> {
    pub fn with_engine(engine: Q, selector: impl Into<String>) -> Self {
        Self {
            engine,
            selector: selector.into(),
            subject_matcher: Box::new(IsAnything),
        }
    }

    pub fn subject(mut self, subject_matcher: BoxedMatcher<Q::Element>) -> Self {
        self.subject_matcher = subject_matcher;
        self
    }
}

impl<Q: SelectorEngine> SelfDescribing for HasUniqueSelector<Q> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text(&format!("has unique selector \"{}\" ", self.selector))
            .append_description_of(&self.subject_matcher);
    }
}

impl<Q: SelectorEngine> Matcher<Q::Element> for HasUniqueSelector<Q> {
    fn matches(&self, actual: &Q::Element) -> bool {
        match select(&self.engine, actual, &self.selector).as_slice() {
            [subject] => self.subject_matcher.matches(subject),
            _ => false,
        }
    }

    fn describe_mismatch(&self, actual: &Q::Element, description: &mut Description) {
        match select(&self.engine, actual, &self.selector).as_slice() {
            [subject] => {
                description.append_text(&self.selector).append_text(" ");
                self.subject_matcher.describe_mismatch(subject, description);
            }
            selected => {
                description.append_text(&format!(
                    "{} selector(s) \"{}\"",
                    selected.len(),
                    self.selector
                ));
            }
        }
    }
}

/// Nothing is selected
pub struct HasNoSelector<Q: SelectorEngine = CssSelectorEngine> {
    engine: Q,
    selector: String,
}

impl HasNoSelector<CssSelectorEngine> {
    pub fn new(selector: impl Into<String>) -> Self {
        Self::with_engine(CssSelectorEngine, selector)
    }
}

impl<Q: SelectorEngine> HasNoSelector<Q> {
    pub fn with_engine(engine: Q, selector: impl Into<String>) -> Self {
        Self {
            engine,
            selector: selector.into(),
        }
    }
}

impl<Q: SelectorEngine> SelfDescribing for HasNoSelector<Q> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("has no selector \"{}\"", self.selector));
    }
}

impl<Q: SelectorEngine> Matcher<Q::Element> for HasNoSelector<Q> {
    fn matches(&self, actual: &Q::Element) -> bool {
        select(&self.engine, actual, &self.selector).is_empty()
    }

    fn describe_mismatch(&self, actual: &Q::Element, description: &mut Description) {
        if let Some(found) = select(&self.engine, actual, &self.selector).first() {
            description.append_text(&format!("found element \"{}\"", found.tag_name()));
        }
    }
}
