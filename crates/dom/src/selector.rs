//! Selector engine adapter
//!
//! Selector resolution is external. The matchers only need `query_all`:
//! root element plus selector string in, matched elements out, in
//! document order. Swap the engine without touching any matcher.

use scraper::Selector;
use tracing::debug;

use crate::element::{Element, ElementView};
use crate::error::{DomError, Result};

/// Resolves a selector string against a root element
pub trait SelectorEngine: Send + Sync {
    type Element: ElementView;

    /// Matching elements in document order; empty is a valid result
    fn query_all(&self, root: &Self::Element, selector: &str) -> Result<Vec<Self::Element>>;
}

/// CSS3 selector engine backed by `scraper`
///
/// Only descendants of the root are candidates, never the root itself.
/// Ancestors still count for combinators, so `ol > li` works from the `<ol>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorEngine;

impl SelectorEngine for CssSelectorEngine {
    type Element = Element;

    fn query_all(&self, root: &Element, selector: &str) -> Result<Vec<Element>> {
        let parsed = Selector::parse(selector).map_err(|err| DomError::InvalidSelector {
            selector: selector.to_string(),
            reason: err.to_string(),
        })?;

        let Some(scope) = root.node() else {
            return Ok(Vec::new());
        };

        let matched: Vec<Element> = scope
            .select(&parsed)
            .map(|found| root.sibling_handle(found.id()))
            .collect();

        debug!(selector, count = matched.len(), "selector evaluated");
        Ok(matched)
    }
}
