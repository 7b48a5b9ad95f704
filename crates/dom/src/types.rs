//! Core node type definitions
//!
//! Key design principles:
//! 1. Node kinds use the DOM numeric codes, so they line up with any tree source
//! 2. Child nodes carry the element view itself, text is owned
//! 3. Non-element children are kept (callers filter), never dropped silently

use serde::{Deserialize, Serialize};

/// Node type matching DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            3 => Some(NodeType::Text),
            7 => Some(NodeType::ProcessingInstruction),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::DocumentType),
            11 => Some(NodeType::DocumentFragment),
            _ => None,
        }
    }
}

/// One immediate child of an element, as the tree reports it
#[derive(Debug, Clone, PartialEq)]
pub enum ChildNode<E> {
    Element(E),
    Text(String),
    Comment(String),
    Other(NodeType),
}

impl<E> ChildNode<E> {
    pub fn node_type(&self) -> NodeType {
        match self {
            ChildNode::Element(_) => NodeType::Element,
            ChildNode::Text(_) => NodeType::Text,
            ChildNode::Comment(_) => NodeType::Comment,
            ChildNode::Other(node_type) => *node_type,
        }
    }

    /// The element, if this child is one
    pub fn into_element(self) -> Option<E> {
        match self {
            ChildNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Attributes rendered in element snippets by default
///
/// Enough to tell elements apart in a mismatch report: identity first,
/// then the form state that boolean-attribute matchers look at.
pub const DEFAULT_INCLUDE_ATTRIBUTES: &[&str] = &[
    "id",
    "class",
    "name",
    "type",
    "href",
    "value",
    "selected",
    "checked",
    "disabled",
    "readonly",
];
