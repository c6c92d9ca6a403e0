//! Plain text flattening without a DOM
//!
//! The markup flattener strips tags with regular expressions. It does not break lines at
//! block boundaries: `<h1>A</h1><p>B</p>` flattens to `AB`. The DOM flattener
//! ([`crate::parser::DomParser`]) does break lines there; the two are allowed to differ.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style regex"));
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Named entities decoded by the markup flattener, applied in this order.
pub const DECODED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Flatten HTML to a single line of plain text.
///
/// Style and script blocks are dropped with their content, remaining tags are removed,
/// the [`DECODED_ENTITIES`] are decoded and whitespace is collapsed.
pub fn flatten_markup(html: &str) -> String {
    let without_styles = STYLE_BLOCK.replace_all(html, "");
    let without_scripts = SCRIPT_BLOCK.replace_all(&without_styles, "");
    let mut text = ANY_TAG.replace_all(&without_scripts, "").into_owned();
    for (entity, replacement) in DECODED_ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    collapse_whitespace(&text)
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
