//! Document loading - the entry point from markup text to element views
//!
//! Parsing belongs to the external HTML parser (html5ever through scraper).
//! This module only wraps the parsed tree and hands out `Element` handles.

use std::rc::Rc;

use scraper::{Html, Node};
use tracing::debug;

use crate::element::{Element, ElementView};
use crate::error::{DomError, Result};
use crate::selector::{CssSelectorEngine, SelectorEngine};

/// A parsed markup tree
#[derive(Debug, Clone)]
pub struct Document {
    html: Rc<Html>,
}

impl Document {
    /// Parse a complete HTML document
    pub fn parse(markup: &str) -> Self {
        Self::from_html(Html::parse_document(markup))
    }

    /// Parse an HTML fragment, as if it were the content of a `<body>`
    pub fn parse_fragment(markup: &str) -> Self {
        Self::from_html(Html::parse_fragment(markup))
    }

    fn from_html(html: Html) -> Self {
        if !html.errors.is_empty() {
            debug!(errors = html.errors.len(), "markup parsed with recoverable errors");
        }
        Self {
            html: Rc::new(html),
        }
    }

    /// The `<html>` element
    pub fn root_element(&self) -> Element {
        Element::new(Rc::clone(&self.html), self.html.root_element().id())
    }

    /// First element of the content
    ///
    /// For a fragment this is the first top-level element; for a full
    /// document it is the first element inside `<body>`.
    pub fn first_element(&self) -> Result<Element> {
        let root = self.root_element();
        let container = if self.is_fragment() {
            Some(root)
        } else {
            root.children()
                .into_iter()
                .find(|child| child.tag_name() == "body")
        };

        container
            .and_then(|container| container.children().into_iter().next())
            .ok_or_else(|| DomError::NoElement("document has no content element".to_string()))
    }

    /// Elements under `<html>` matching a CSS selector, in document order
    pub fn select(&self, selector: &str) -> Result<Vec<Element>> {
        CssSelectorEngine.query_all(&self.root_element(), selector)
    }

    fn is_fragment(&self) -> bool {
        matches!(self.html.tree.root().value(), Node::Fragment)
    }
}
