//! Node types for the scratch document surface.

use serde::{Deserialize, Serialize};

/// Handle to an element node within a [`Document`](crate::Document).
///
/// Ids are only meaningful for the document that created them and become
/// stale once the body is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Content of an element node, in document order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Child {
    /// A nested element node
    Node(NodeId),
    /// A raw markup chunk, serialized verbatim
    Markup(String),
}

/// Element node storage.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeData {
    /// Tag name, lowercase
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: Vec<(String, String)>,
    /// Children in document order
    pub children: Vec<Child>,
    /// Parent node, None for the body and for detached nodes
    pub parent: Option<NodeId>,
}

impl NodeData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Value handed to the mount primitive by a render function.
///
/// The original render value is opaque to the sequencer; the harness decides
/// how it lands in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderValue {
    /// Raw markup to be mounted under the effective root
    Markup(String),
    /// Nothing to mount; the render function mutated the document itself
    None,
}

impl RenderValue {
    /// Markup render value from anything string-like.
    pub fn markup(markup: impl Into<String>) -> Self {
        Self::Markup(markup.into())
    }
}

impl From<&str> for RenderValue {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl From<String> for RenderValue {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}
