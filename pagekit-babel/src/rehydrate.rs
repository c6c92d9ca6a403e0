//! Rehydrating edited plain text into a node forest
//!
//! When the user edits the text view, the edited words are poured back into the text
//! leaves of the last known forest so that tags, attributes and nesting survive.
//!
//! Distribution is purely positional. With `W` words and `N` text leaves, every leaf
//! (depth-first, left to right) takes the next `ceil(W / N)` words; leaves reached
//! after the words run out become empty strings. Adding or deleting a single word
//! therefore shifts every later leaf. Nothing tries to match words to leaves by content.
//!
//! Without a previous forest the text is split into blank-line separated paragraphs and
//! each one is guessed to be a heading, a list item or a plain paragraph.

use crate::node::{count_text_leaves, ContentNode};
use crate::serializer::serialize;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n\r?\n").expect("valid blank line regex"));
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("valid numbered item regex"));
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:•|-|\d+\.)\s*").expect("valid list marker regex"));

/// Tuning for the paragraph guessing used when no previous forest exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RehydrateOptions {
    /// Paragraphs shorter than this (in characters) may be promoted to headings.
    pub heading_max_chars: usize,
}

impl Default for RehydrateOptions {
    fn default() -> Self {
        Self {
            heading_max_chars: 100,
        }
    }
}

/// Rebuild a forest from edited text, reusing the structure of `previous` when there is one.
pub fn from_text(text: &str, previous: &[ContentNode], options: &RehydrateOptions) -> Vec<ContentNode> {
    if previous.is_empty() {
        guess_structure(text, options)
    } else {
        redistribute_words(text, previous)
    }
}

/// Rehydrate and render in one go.
///
/// With a previous forest this is `serialize(from_text(..))`. Without one the guessed
/// blocks are joined with newlines, and text with no paragraphs at all comes back as is.
pub fn text_to_html(text: &str, previous: &[ContentNode], options: &RehydrateOptions) -> String {
    if !previous.is_empty() {
        return serialize(&redistribute_words(text, previous));
    }

    let blocks = guess_structure(text, options);
    if blocks.is_empty() {
        return text.to_string();
    }
    blocks
        .iter()
        .map(|block| serialize(std::slice::from_ref(block)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap every paragraph in `<p>`, with no heading or list guessing.
pub fn paragraphs_to_html(text: &str) -> String {
    paragraphs(text)
        .map(|p| format!("<p>{p}</p>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace the text of every leaf in `previous` with its positional share of the words.
pub fn redistribute_words(text: &str, previous: &[ContentNode]) -> Vec<ContentNode> {
    let leaves = count_text_leaves(previous);
    if leaves == 0 {
        debug!("previous content has no text leaves; edited text discarded");
        return previous.to_vec();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let per_leaf = words.len().div_ceil(leaves);
    if words.len() < leaves {
        debug!(
            words = words.len(),
            leaves, "fewer words than text leaves; trailing leaves emptied"
        );
    }

    let mut distributor = WordDistributor {
        words: &words,
        per_leaf,
        next: 0,
    };
    previous.iter().map(|node| distributor.apply(node)).collect()
}

struct WordDistributor<'a> {
    words: &'a [&'a str],
    per_leaf: usize,
    next: usize,
}

impl WordDistributor<'_> {
    fn apply(&mut self, node: &ContentNode) -> ContentNode {
        match node {
            ContentNode::Text { .. } => ContentNode::text(self.take()),
            ContentNode::Element {
                tag,
                attributes,
                children,
            } => ContentNode::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: children.iter().map(|child| self.apply(child)).collect(),
            },
        }
    }

    fn take(&mut self) -> String {
        let start = self.next.min(self.words.len());
        let end = (self.next + self.per_leaf).min(self.words.len());
        self.next += self.per_leaf;
        self.words[start..end].join(" ")
    }
}

fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    BLANK_LINE.split(text).map(str::trim).filter(|p| !p.is_empty())
}

fn guess_structure(text: &str, options: &RehydrateOptions) -> Vec<ContentNode> {
    paragraphs(text)
        .map(|paragraph| {
            let (tag, body) = classify(paragraph, options);
            ContentNode::element(tag).with_children([ContentNode::text(body)])
        })
        .collect()
}

fn classify<'a>(paragraph: &'a str, options: &RehydrateOptions) -> (&'static str, &'a str) {
    if looks_like_heading(paragraph, options) {
        return ("h2", paragraph);
    }
    if paragraph.starts_with('•') || paragraph.starts_with('-') || NUMBERED_ITEM.is_match(paragraph)
    {
        let body = match LIST_MARKER.find(paragraph) {
            Some(marker) => &paragraph[marker.end()..],
            None => paragraph,
        };
        return ("li", body);
    }
    ("p", paragraph)
}

fn looks_like_heading(paragraph: &str, options: &RehydrateOptions) -> bool {
    paragraph.chars().count() < options.heading_max_chars
        && !paragraph.contains('.')
        && paragraph == paragraph.to_uppercase()
}
