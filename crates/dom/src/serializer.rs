//! Element snippets for diagnostics
//!
//! Mismatch descriptions need to name elements. A whole subtree is too
//! much; a bare tag name is too little. This renders the opening tag with
//! the identifying attributes, a capped slice of the text, and the
//! closing tag: `<li class="odd">first</li>`.

use serde::{Deserialize, Serialize};

use crate::element::ElementView;
use crate::error::Result;
use crate::types::DEFAULT_INCLUDE_ATTRIBUTES;
use crate::utils;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Attributes shown in the opening tag, in this order
    pub include_attributes: Vec<String>,
    /// Text longer than this is cut and suffixed with `...`
    pub max_text_length: usize,
    pub include_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_attributes: DEFAULT_INCLUDE_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_text_length: 40,
            include_text: true,
        }
    }
}

impl RenderConfig {
    /// Load from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Element snippet renderer
#[derive(Debug, Clone, Default)]
pub struct ElementRenderer {
    config: RenderConfig,
}

impl ElementRenderer {
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render one element
    pub fn render<E: ElementView>(&self, element: &E) -> String {
        let tag = element.tag_name();
        let mut output = String::with_capacity(64);

        output.push('<');
        output.push_str(tag);
        for name in &self.config.include_attributes {
            if let Some(value) = element.attr(name) {
                output.push_str(&format!(" {}=\"{}\"", name, value));
            }
        }
        output.push('>');

        if self.config.include_text {
            let text = utils::collapse_whitespace(&element.text_content());
            output.push_str(&utils::cap_text_length(&text, self.config.max_text_length));
        }

        output.push_str("</");
        output.push_str(tag);
        output.push('>');
        output
    }
}
