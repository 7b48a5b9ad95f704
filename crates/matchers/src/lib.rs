//! Structural assertions over markup trees
//!
//! Composable matchers for test suites: does this element have the
//! right tag, attributes, text, children, and the elements a CSS
//! selector should find? Every matcher answers yes or no, and explains
//! a no.
//!
//! ## Architecture
//!
//! ```text
//! factory call → matcher tree (combinators → selector/collection → feature)
//!                     ↓ matches(element)
//!              SelectorEngine::query_all / ElementView features
//!                     ↓ on failure
//!              Description, assembled bottom-up
//! ```
//!
//! - **Immutable**: matchers are built once and are `Send + Sync`
//! - **Total**: null and foreign values are clean non-matches
//! - **Faithful diagnostics**: mismatches name what was actually observed

pub mod assert;
pub mod children;
pub mod collection;
pub mod combinators;
pub mod description;
pub mod factories;
pub mod feature;
pub mod matcher;
pub mod selector;
pub mod text;

pub use assert::{assert_that, assert_that_with_reason, check, MatchReport};
pub use combinators::{all_of, any_of, anything, not};
pub use description::Description;
pub use factories::*;
pub use matcher::{BoxedMatcher, Matcher, SelfDescribing};
pub use text::{
    blank_string, contains_string, ends_with, equal_to, equal_to_ignoring_case, starts_with,
};

pub use dom::{Document, Element, ElementView};
