//! Element views - read-only access to one element of a markup tree
//!
//! The matchers never see the tree itself. They see an `ElementView`:
//! tag, attributes, text, immediate children. Anything that can answer
//! those five questions can be matched.

use std::fmt;
use std::rc::Rc;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};
use smallvec::SmallVec;

use crate::error::Result;
use crate::selector::{CssSelectorEngine, SelectorEngine};
use crate::serializer::ElementRenderer;
use crate::types::{ChildNode, NodeType};

/// Read-only view over one element node
///
/// Implementations must never mutate the underlying tree.
pub trait ElementView: Sized {
    /// Tag name as the tree reports it
    fn tag_name(&self) -> &str;

    /// Attribute value by exact (case-sensitive) name
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenation of all descendant text, not just direct children
    fn text_content(&self) -> String;

    /// Immediate child nodes, in order, of every kind
    fn child_nodes(&self) -> Vec<ChildNode<Self>>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attribute value, or an empty string when absent
    fn attribute(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    /// Immediate element children only (text and comments filtered out)
    fn children(&self) -> SmallVec<[Self; 4]> {
        self.child_nodes()
            .into_iter()
            .filter_map(ChildNode::into_element)
            .collect()
    }

    /// Short snippet identifying this element in diagnostics
    fn describe(&self) -> String {
        format!("<{}>", self.tag_name())
    }
}

/// Default element view over a parsed markup tree
///
/// A handle: shared document plus node id. Cloning is cheap and the
/// handle owns its document, so it can outlive the `Document` it came from.
#[derive(Clone)]
pub struct Element {
    html: Rc<Html>,
    id: NodeId,
}

impl Element {
    pub(crate) fn new(html: Rc<Html>, id: NodeId) -> Self {
        Self { html, id }
    }

    /// Another element of the same tree
    pub(crate) fn sibling_handle(&self, id: NodeId) -> Self {
        Self::new(Rc::clone(&self.html), id)
    }

    pub(crate) fn node(&self) -> Option<ElementRef<'_>> {
        self.html.tree.get(self.id).and_then(ElementRef::wrap)
    }

    /// Markup of this element, tags included
    pub fn outer_html(&self) -> String {
        self.node().map(|node| node.html()).unwrap_or_default()
    }

    /// Descendants matching a CSS selector, in document order
    pub fn select(&self, selector: &str) -> Result<Vec<Element>> {
        CssSelectorEngine.query_all(self, selector)
    }
}

impl ElementView for Element {
    fn tag_name(&self) -> &str {
        self.node().map_or("", |node| node.value().name())
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.node().and_then(|node| node.value().attr(name))
    }

    fn text_content(&self) -> String {
        self.node()
            .map(|node| node.text().collect())
            .unwrap_or_default()
    }

    fn child_nodes(&self) -> Vec<ChildNode<Self>> {
        let Some(node) = self.node() else {
            return Vec::new();
        };

        node.children()
            .map(|child| match child.value() {
                Node::Element(_) => ChildNode::Element(self.sibling_handle(child.id())),
                Node::Text(text) => ChildNode::Text(String::from(&*text.text)),
                Node::Comment(comment) => ChildNode::Comment(String::from(&*comment.comment)),
                Node::ProcessingInstruction(_) => {
                    ChildNode::Other(NodeType::ProcessingInstruction)
                }
                Node::Doctype(_) => ChildNode::Other(NodeType::DocumentType),
                Node::Document => ChildNode::Other(NodeType::Document),
                Node::Fragment => ChildNode::Other(NodeType::DocumentFragment),
            })
            .collect()
    }

    fn describe(&self) -> String {
        ElementRenderer::new().render(self)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.html, &other.html) && self.id == other.id
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag_name())
            .finish()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
