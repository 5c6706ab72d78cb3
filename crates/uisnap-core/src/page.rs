//! Capture types produced for each rendered example.

use serde::{Deserialize, Serialize};

/// Reference to a stylesheet associated with an example.
///
/// Declared on a render descriptor and attached verbatim to the capture; the
/// runner never fetches or inlines stylesheet content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Optional stable identifier for the stylesheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Location of the stylesheet (path or URL)
    pub source: String,
}

impl Stylesheet {
    /// Create a stylesheet reference from a source location.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
        }
    }

    /// Create a stylesheet reference with a stable identifier.
    pub fn with_id(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            source: source.into(),
        }
    }
}

/// Serialized capture of one rendered example.
///
/// Produced fresh per cursor position and handed to the caller; the sequencer
/// retains nothing after returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// Serialized innerHTML of the effective root element
    pub html: String,

    /// Reserved, always empty (kept for output-contract compatibility)
    pub css: String,

    /// Component the example belongs to
    pub component: String,

    /// Variant name of the example
    pub variant: String,

    /// Asset references discovered in the rendered markup
    pub asset_paths: Vec<String>,

    /// Stylesheets declared by the example's render descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheets: Option<Vec<Stylesheet>>,
}

impl RenderedPage {
    /// Create a capture with empty reserved fields.
    pub fn new(
        html: impl Into<String>,
        component: impl Into<String>,
        variant: impl Into<String>,
        asset_paths: Vec<String>,
    ) -> Self {
        Self {
            html: html.into(),
            css: String::new(),
            component: component.into(),
            variant: variant.into(),
            asset_paths,
            stylesheets: None,
        }
    }
}
