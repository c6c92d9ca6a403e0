//! Tag-splitting parser for environments without a tree builder
//!
//! The input is cut at tag tokens. Text between tokens becomes text nodes, opening tags
//! become childless elements, closing tags are consumed. The result is always flat:
//!
//! ```text
//! <p class="x">Hi <b>there</b></p>   →   [p{class=x}, "Hi", b, "there"]
//! ```
//!
//! Attributes are split on whitespace, so quoted values containing spaces keep only
//! their first word.

use super::HtmlParser;
use crate::node::{Attributes, ContentNode};
use crate::text::flatten_markup;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// `<`, optional `/` and whitespace, then a tag name (or `!`/`?` declaration) running
/// to the next `>`.
static TAG_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)\s*([A-Za-z!?][^<>]*)>").expect("valid tag token regex"));

/// Parser that never builds nesting; see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagSplitParser;

impl HtmlParser for TagSplitParser {
    fn name(&self) -> &str {
        "tag-split"
    }

    fn parse(&self, html: &str) -> Vec<ContentNode> {
        let mut nodes = Vec::new();
        let mut cursor = 0;

        for caps in TAG_TOKEN.captures_iter(html) {
            let Some(token) = caps.get(0) else {
                continue;
            };
            push_text(&html[cursor..token.start()], &mut nodes);
            cursor = token.end();

            let closing = !caps[1].is_empty();
            let info = caps[2].trim();
            if closing {
                trace!(tag = info, "closing tag consumed");
                continue;
            }
            if info.starts_with('!') || info.starts_with('?') {
                trace!(token = token.as_str(), "declaration skipped");
                continue;
            }
            if let Some(element) = parse_opening_tag(info) {
                nodes.push(element);
            }
        }
        push_text(&html[cursor..], &mut nodes);

        nodes
    }

    fn to_text(&self, html: &str) -> String {
        flatten_markup(html)
    }
}

fn push_text(segment: &str, nodes: &mut Vec<ContentNode>) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        nodes.push(ContentNode::text(trimmed));
    }
}

/// Build a childless element from the inside of an opening tag, e.g. `img src="a.png" /`.
fn parse_opening_tag(info: &str) -> Option<ContentNode> {
    let info = info.strip_suffix('/').unwrap_or(info).trim_end();
    let mut parts = info.split_whitespace();
    let tag = parts.next()?;

    let attributes: Attributes = parts
        .filter_map(|part| {
            let (name, value) = part.split_once('=')?;
            if name.is_empty() {
                return None;
            }
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    Some(ContentNode::Element {
        tag: tag.to_ascii_lowercase(),
        attributes,
        children: Vec::new(),
    })
}
