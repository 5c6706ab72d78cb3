//! Small CSS-like selector for locating rendered roots.
//!
//! Supports the subset the runner needs: an optional tag name followed by any
//! combination of `#id` and `.class` parts (e.g. `div`, `#mount`,
//! `.screen.dark`, `main#app.wide`). No combinators, no attribute selectors.

use uisnap_core::{Error, Result};

use crate::document::Document;
use crate::node::NodeId;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name, if any
    tag: Option<String>,
    /// Required `id` attribute, if any
    id: Option<String>,
    /// Required classes (all must be present)
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::InvalidSelector("empty selector".to_string()));
        }

        let mut tag = None;
        let mut id = None;
        let mut classes = Vec::new();

        let mut rest = input;
        if !rest.starts_with(['#', '.']) {
            let end = rest.find(['#', '.']).unwrap_or(rest.len());
            let (name, tail) = rest.split_at(end);
            Self::check_name(name, input)?;
            tag = Some(name.to_ascii_lowercase());
            rest = tail;
        }

        while !rest.is_empty() {
            let (marker, tail) = rest.split_at(1);
            let end = tail.find(['#', '.']).unwrap_or(tail.len());
            let (name, remaining) = tail.split_at(end);
            Self::check_name(name, input)?;
            match marker {
                "#" => {
                    if id.replace(name.to_string()).is_some() {
                        return Err(Error::InvalidSelector(format!(
                            "multiple ids in {input:?}"
                        )));
                    }
                }
                "." => classes.push(name.to_string()),
                _ => unreachable!(),
            }
            rest = remaining;
        }

        Ok(Self { tag, id, classes })
    }

    /// Whether a node satisfies every part of the selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if doc.tag(node) != Some(tag.as_str()) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if doc.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let Some(class_attr) = doc.attribute(node, "class") else {
                return false;
            };
            let present: Vec<&str> = class_attr.split_whitespace().collect();
            if !self.classes.iter().all(|c| present.contains(&c.as_str())) {
                return false;
            }
        }

        true
    }

    fn check_name(name: &str, input: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSelector(format!(
                "empty name part in {input:?}"
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidSelector(format!(
                "unsupported characters in {input:?}"
            )));
        }
        Ok(())
    }
}
