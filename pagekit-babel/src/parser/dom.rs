//! DOM-backed parsing with html5ever
//!
//! The fragment is parsed as a whole document so that html5ever applies the usual
//! tree-building rules (implied `<html>`, `<head>`, `<body>`, auto-closed paragraphs,
//! entity decoding). Only the children of `<body>` are converted.

use super::HtmlParser;
use crate::node::{Attributes, ContentNode};
use crate::text::collapse_whitespace;
use html5ever::{parse_document, QualName};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose content never renders as text.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start and end a line when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tr", "ul",
];

/// Parser backed by the html5ever tree builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomParser;

impl HtmlParser for DomParser {
    fn name(&self) -> &str {
        "dom"
    }

    fn parse(&self, html: &str) -> Vec<ContentNode> {
        let dom = parse_html(html);
        match find_element(&dom.document, "body") {
            Some(body) => convert_children(&body),
            None => Vec::new(),
        }
    }

    fn to_text(&self, html: &str) -> String {
        let dom = parse_html(html);
        let Some(body) = find_element(&dom.document, "body") else {
            return String::new();
        };

        let mut raw = String::new();
        collect_text(&body, &mut raw);
        raw.lines()
            .map(collapse_whitespace)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .one(html.as_bytes())
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(tag_name(name)),
        _ => None,
    }
}

fn tag_name(name: &QualName) -> String {
    name.local.to_string().to_ascii_lowercase()
}

/// Qualified attribute name, e.g. `xlink:href` on SVG content.
fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}

/// Depth-first search for the first element with the given tag.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if element_name(child).as_deref() == Some(tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn convert_children(handle: &Handle) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let trimmed = contents.trim();
                if !trimmed.is_empty() {
                    nodes.push(ContentNode::text(trimmed));
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let attributes: Attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
                    .collect();
                nodes.push(ContentNode::Element {
                    tag: tag_name(name),
                    attributes,
                    children: convert_children(child),
                });
            }
            // Comments, doctypes and processing instructions carry no content
            _ => {}
        }
    }
    nodes
}

fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                let tag = tag_name(name);
                if HIDDEN_TAGS.contains(&tag.as_str()) {
                    continue;
                }
                if tag == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCK_TAGS.contains(&tag.as_str());
                if block {
                    out.push('\n');
                }
                collect_text(child, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}
