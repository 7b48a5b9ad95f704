//! Error types for DOM operations
//!
//! Simple, flat error hierarchy. Only collaborator failures live here:
//! a non-matching element is never an error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No element found: {0}")]
    NoElement(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}
