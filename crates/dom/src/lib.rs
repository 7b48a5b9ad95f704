//! DOM element views for structural assertions
//!
//! Read-only access to parsed markup trees, shaped for matching.
//!
//! ## Core Design
//!
//! ```text
//! markup → Document (parsed tree) → Element (handle) → ElementView
//!                                        ↓
//!                         SelectorEngine::query_all(root, selector)
//! ```
//!
//! - **Narrow views**: matchers ask for tag, attributes, text, children
//! - **Pluggable selectors**: `SelectorEngine` hides the CSS implementation
//! - **Never mutate**: every view is read-only

pub mod document;
pub mod element;
pub mod error;
pub mod selector;
pub mod serializer;
pub mod types;
pub mod utils;

pub use document::Document;
pub use element::{Element, ElementView};
pub use error::{DomError, Result};
pub use selector::{CssSelectorEngine, SelectorEngine};
pub use serializer::{ElementRenderer, RenderConfig};
pub use types::*;
