//! HTML parsing strategies
//!
//! Two interchangeable parsers turn an HTML fragment into a [`ContentNode`] forest:
//!
//! | Parser             | Nesting | Entities            | Text flattening                  |
//! |--------------------|---------|---------------------|----------------------------------|
//! | [`DomParser`]      | full    | decoded by html5ever| line breaks at block boundaries  |
//! | [`TagSplitParser`] | flat    | kept as written     | single line, fixed entity table  |
//!
//! The DOM parser delegates structural correctness to `html5ever`. The tag-split parser
//! is a best-effort fallback for headless ingestion: every element it emits is a flat
//! sibling with no children, and closing tags are dropped.
//!
//! Which one runs is picked once, when a [`crate::Converter`] is built from an
//! [`Environment`].

mod dom;
mod tag_split;

pub use dom::DomParser;
pub use tag_split::TagSplitParser;

use crate::node::ContentNode;
use std::fmt;
use std::str::FromStr;

/// Capability interface for turning HTML into content nodes.
///
/// Implementations never fail: malformed input degrades into over- or under-segmented
/// text rather than an error.
pub trait HtmlParser: Send + Sync {
    /// Short name used in configuration and logs (e.g. "dom", "tag-split")
    fn name(&self) -> &str;

    /// Parse an HTML fragment into a forest of nodes.
    fn parse(&self, html: &str) -> Vec<ContentNode>;

    /// Flatten an HTML fragment to plain text the way this environment renders it.
    fn to_text(&self, html: &str) -> String;
}

/// Host environment, deciding which parser backs a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// A full HTML tree builder is available.
    #[default]
    Dom,
    /// No tree builder; fall back to tag splitting.
    Headless,
}

impl Environment {
    pub fn parser(self) -> Box<dyn HtmlParser> {
        match self {
            Environment::Dom => Box::new(DomParser),
            Environment::Headless => Box::new(TagSplitParser),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Dom => "dom",
            Environment::Headless => "tag-split",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dom" => Ok(Environment::Dom),
            "tag-split" | "headless" => Ok(Environment::Headless),
            other => Err(format!(
                "unknown parser '{other}' (expected 'dom' or 'tag-split')"
            )),
        }
    }
}
