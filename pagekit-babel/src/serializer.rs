//! HTML serialization (node forest → HTML string)
//!
//! Text is written as-is: it was captured in renderable form and is never re-escaped.
//! Attribute values are double-quoted without escaping embedded quotes.

use crate::node::{Attributes, ContentNode};

/// Tags written as `<tag />` when they have no rendered children.
pub const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Serialize a node forest to HTML.
pub fn serialize(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &ContentNode, out: &mut String) {
    match node {
        ContentNode::Text { text } => out.push_str(text),
        ContentNode::Element {
            tag,
            attributes,
            children,
        } => {
            let inner = serialize(children);
            out.push('<');
            out.push_str(tag);
            write_attributes(attributes, out);
            if inner.is_empty() && is_void(tag) {
                out.push_str(" />");
                return;
            }
            out.push('>');
            out.push_str(&inner);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}
