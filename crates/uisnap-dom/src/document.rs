//! Arena-backed document model.

use tracing::debug;

use uisnap_core::{Error, Result};

use crate::node::{Child, NodeData, NodeId, RenderValue};
use crate::selector::Selector;

/// The scratch document that examples render into.
///
/// One document is shared across a whole run and destructively overwritten
/// per example: [`Document::clear_body`] detaches everything under the body
/// before each render. Node handles from before a reset are stale and must
/// not be reused.
#[derive(Debug, Clone)]
pub struct Document {
    /// Node arena; index 0 is always the body
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create an empty document containing only a body element.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new("body")],
        }
    }

    /// Handle to the body element.
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(tag));
        id
    }

    /// Set an attribute on a node, replacing any existing value.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let data = self.node_mut(node)?;
        if let Some(entry) = data.attrs.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            data.attrs.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }

    /// Read an attribute from a node.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node.0).and_then(|data| data.attr(name))
    }

    /// Tag name of a node.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|data| data.tag.as_str())
    }

    /// Append a child element to a parent node.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child {
            return Err(Error::InvalidInput(format!(
                "cannot append {child} to itself"
            )));
        }
        self.node(child)?;
        self.node_mut(parent)?.children.push(Child::Node(child));
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Append a raw markup chunk to a node's content.
    pub fn append_markup(&mut self, node: NodeId, markup: &str) -> Result<()> {
        self.node_mut(node)?
            .children
            .push(Child::Markup(markup.to_string()));
        Ok(())
    }

    /// Mount a render value under a node.
    pub fn mount(&mut self, node: NodeId, value: RenderValue) -> Result<()> {
        match value {
            RenderValue::Markup(markup) => self.append_markup(node, &markup),
            RenderValue::None => Ok(()),
        }
    }

    /// Detach all content under the body and reclaim its arena slots.
    ///
    /// One document is shared across a whole run, so slots must not
    /// accumulate between examples. Node handles created before this call are
    /// stale afterwards.
    pub fn clear_body(&mut self) {
        let reclaimed = self.nodes.len() - 1;
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        debug!("Cleared document body ({reclaimed} nodes reclaimed)");
    }

    /// Direct child element nodes, in document order.
    pub fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        let Some(data) = self.nodes.get(node.0) else {
            return Vec::new();
        };
        data.children
            .iter()
            .filter_map(|child| match child {
                Child::Node(id) => Some(*id),
                Child::Markup(_) => None,
            })
            .collect()
    }

    /// Find an element under the body by its `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }

    /// Find the first element under the body matching a selector.
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .find(|node| selector.matches(self, *node))
    }

    /// Serialized content of a node (children only).
    pub fn inner_html(&self, node: NodeId) -> String {
        let Some(data) = self.nodes.get(node.0) else {
            return String::new();
        };
        let mut out = String::new();
        for child in &data.children {
            match child {
                Child::Markup(markup) => out.push_str(markup),
                Child::Node(id) => out.push_str(&self.outer_html(*id)),
            }
        }
        out
    }

    /// Serialized node including its own tag and attributes.
    pub fn outer_html(&self, node: NodeId) -> String {
        let Some(data) = self.nodes.get(node.0) else {
            return String::new();
        };
        let mut out = String::new();
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attrs {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        out.push('>');
        out.push_str(&self.inner_html(node));
        out.push_str(&format!("</{}>", data.tag));
        out
    }

    /// All element nodes under a root, preorder, excluding the root itself.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_nodes(root);
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let mut children = self.child_nodes(node);
            children.reverse();
            stack.extend(children);
        }
        out
    }

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_root() -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        doc.set_attribute(root, "id", "uisnap-root").unwrap();
        doc.append_child(doc.body(), root).unwrap();
        (doc, root)
    }

    #[test]
    fn test_new_document_has_empty_body() {
        let doc = Document::new();
        assert_eq!(doc.inner_html(doc.body()), "");
        assert!(doc.child_nodes(doc.body()).is_empty());
    }

    #[test]
    fn test_append_markup_and_inner_html() {
        let (mut doc, root) = doc_with_root();
        doc.append_markup(root, "<p>hello</p>").unwrap();
        assert_eq!(doc.inner_html(root), "<p>hello</p>");
        assert_eq!(
            doc.inner_html(doc.body()),
            "<div id=\"uisnap-root\"><p>hello</p></div>"
        );
    }

    #[test]
    fn test_outer_html_includes_attributes() {
        let mut doc = Document::new();
        let node = doc.create_element("span");
        doc.set_attribute(node, "class", "badge primary").unwrap();
        doc.append_child(doc.body(), node).unwrap();
        assert_eq!(
            doc.outer_html(node),
            "<span class=\"badge primary\"></span>"
        );
    }

    #[test]
    fn test_set_attribute_replaces_existing() {
        let mut doc = Document::new();
        let node = doc.create_element("div");
        doc.set_attribute(node, "id", "a").unwrap();
        doc.set_attribute(node, "id", "b").unwrap();
        assert_eq!(doc.attribute(node, "id"), Some("b"));
    }

    #[test]
    fn test_element_by_id() {
        let (doc, root) = doc_with_root();
        assert_eq!(doc.element_by_id("uisnap-root"), Some(root));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn test_element_by_id_nested() {
        let (mut doc, root) = doc_with_root();
        let inner = doc.create_element("section");
        doc.set_attribute(inner, "id", "deep").unwrap();
        doc.append_child(root, inner).unwrap();
        assert_eq!(doc.element_by_id("deep"), Some(inner));
    }

    #[test]
    fn test_clear_body_detaches_everything() {
        let (mut doc, root) = doc_with_root();
        doc.append_markup(root, "<p>leftover</p>").unwrap();
        doc.clear_body();
        assert_eq!(doc.inner_html(doc.body()), "");
        assert_eq!(doc.element_by_id("uisnap-root"), None);
    }

    #[test]
    fn test_clear_body_reclaims_arena_slots() {
        let (mut doc, root) = doc_with_root();
        for _ in 0..10 {
            let node = doc.create_element("span");
            doc.append_child(root, node).unwrap();
        }
        doc.clear_body();
        // The arena restarts after the body; repeated resets must not grow it
        assert_eq!(doc.create_element("div"), NodeId(1));
    }

    #[test]
    fn test_mount_markup() {
        let (mut doc, root) = doc_with_root();
        doc.mount(root, RenderValue::markup("<b>x</b>")).unwrap();
        assert_eq!(doc.inner_html(root), "<b>x</b>");
    }

    #[test]
    fn test_mount_none_is_noop() {
        let (mut doc, root) = doc_with_root();
        doc.mount(root, RenderValue::None).unwrap();
        assert_eq!(doc.inner_html(root), "");
    }

    #[test]
    fn test_append_child_to_itself_fails() {
        let mut doc = Document::new();
        let node = doc.create_element("div");
        assert!(doc.append_child(node, node).is_err());
    }

    #[test]
    fn test_child_nodes_skip_markup_chunks() {
        let (mut doc, root) = doc_with_root();
        doc.append_markup(root, "text").unwrap();
        let inner = doc.create_element("em");
        doc.append_child(root, inner).unwrap();
        assert_eq!(doc.child_nodes(root), vec![inner]);
    }

    #[test]
    fn test_query_selector() {
        let (mut doc, _root) = doc_with_root();
        let target = doc.create_element("div");
        doc.set_attribute(target, "class", "mount-point").unwrap();
        doc.append_child(doc.body(), target).unwrap();

        let selector = Selector::parse(".mount-point").unwrap();
        assert_eq!(doc.query_selector(&selector), Some(target));

        let missing = Selector::parse(".absent").unwrap();
        assert_eq!(doc.query_selector(&missing), None);
    }
}
