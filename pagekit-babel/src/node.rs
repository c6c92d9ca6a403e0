//! Core data structures for page content.
//!
//! A page body is a forest of [`ContentNode`]s rather than a single rooted tree, since
//! what gets edited is the inner content of a page, not a full document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name → value, kept in authored order.
pub type Attributes = IndexMap<String, String>;

/// A node of page content: a text leaf or an element with attributes and children.
///
/// Serialized as `{"type": "text", "text": ...}` or
/// `{"type": "element", "tag": ..., "attributes": {...}, "children": [...]}`, with
/// `attributes` and `children` omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        attributes: Attributes,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text { text: text.into() }
    }

    /// An element with no attributes and no children. The tag is lowercased.
    pub fn element(tag: impl AsRef<str>) -> Self {
        ContentNode::Element {
            tag: tag.as_ref().to_ascii_lowercase(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. No-op on text nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ContentNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Append children. No-op on text nodes.
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = ContentNode>) -> Self {
        if let ContentNode::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            ContentNode::Element { tag, .. } => Some(tag),
            ContentNode::Text { .. } => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            ContentNode::Element { attributes, .. } => Some(attributes),
            ContentNode::Text { .. } => None,
        }
    }

    /// Children of an element; always empty for text nodes.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element { children, .. } => children,
            ContentNode::Text { .. } => &[],
        }
    }
}

/// Count text leaves across the whole forest.
pub fn count_text_leaves(nodes: &[ContentNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            ContentNode::Text { .. } => 1,
            ContentNode::Element { children, .. } => count_text_leaves(children),
        })
        .sum()
}

/// Text leaves in depth-first document order.
pub fn text_leaves(nodes: &[ContentNode]) -> Vec<&str> {
    let mut leaves = Vec::new();
    collect_text_leaves(nodes, &mut leaves);
    leaves
}

fn collect_text_leaves<'a>(nodes: &'a [ContentNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            ContentNode::Text { text } => out.push(text),
            ContentNode::Element { children, .. } => collect_text_leaves(children, out),
        }
    }
}

/// The three views of one document. Only `json` is ever authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentData {
    pub html: String,
    pub text: String,
    pub json: Vec<ContentNode>,
}
