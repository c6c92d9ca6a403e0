//! Format dispatcher
//!
//! A [`Converter`] turns page content between any two of html, text and json:
//!
//! | from → to   | behavior                                                         |
//! |-------------|------------------------------------------------------------------|
//! | html → json | parse, then pretty-print the forest                               |
//! | html → text | flatten                                                           |
//! | json → html | read the forest, serialize it                                     |
//! | json → text | json → html, then flatten                                         |
//! | text → html | rehydrate into the previous forest, or wrap paragraphs in `<p>`   |
//! | text → json | text → html, parse, pretty-print                                  |
//! | X → X       | identity                                                          |
//!
//! [`Converter::convert`] backs an interactive editor and never fails: on any error it
//! hands the input back unchanged, so callers can detect a no-op by comparing input and
//! output. [`Converter::try_convert`] exposes the same table with errors.

use crate::error::ConvertError;
use crate::format::ContentFormat;
use crate::node::{ContentData, ContentNode};
use crate::parser::{Environment, HtmlParser};
use crate::rehydrate::{self, RehydrateOptions};
use crate::serializer::serialize;
use tracing::debug;

/// Options that shape a [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub environment: Environment,
    /// Indent JSON output (two spaces) instead of writing it on one line.
    pub pretty_json: bool,
    pub rehydrate: RehydrateOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            environment: Environment::Dom,
            pretty_json: true,
            rehydrate: RehydrateOptions::default(),
        }
    }
}

/// Converts page content between formats using one parsing strategy.
pub struct Converter {
    parser: Box<dyn HtmlParser>,
    pretty_json: bool,
    rehydrate: RehydrateOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            parser: options.environment.parser(),
            pretty_json: options.pretty_json,
            rehydrate: options.rehydrate,
        }
    }

    /// Converter using the html5ever tree builder.
    pub fn dom() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Converter using the flat tag-splitting parser.
    pub fn headless() -> Self {
        Self::new(ConvertOptions {
            environment: Environment::Headless,
            ..ConvertOptions::default()
        })
    }

    pub fn parser(&self) -> &dyn HtmlParser {
        self.parser.as_ref()
    }

    /// HTML → node forest.
    pub fn parse(&self, html: &str) -> Vec<ContentNode> {
        self.parser.parse(html)
    }

    /// HTML → plain text.
    pub fn to_text(&self, html: &str) -> String {
        self.parser.to_text(html)
    }

    /// Derive every view of an HTML document.
    pub fn content_data(&self, html: &str) -> ContentData {
        ContentData {
            html: html.to_string(),
            text: self.to_text(html),
            json: self.parse(html),
        }
    }

    /// Derive every view of a stored node forest.
    pub fn content_data_from_nodes(&self, nodes: &[ContentNode]) -> ContentData {
        let html = serialize(nodes);
        ContentData {
            text: self.to_text(&html),
            html,
            json: nodes.to_vec(),
        }
    }

    /// Convert `content` from one format to another, never failing.
    ///
    /// `previous` is the last known forest, used when converting from text. Pass
    /// an empty slice to get heading and list guessing for a brand-new document; `None`
    /// wraps every paragraph in `<p>`.
    pub fn convert(
        &self,
        content: &str,
        from: ContentFormat,
        to: ContentFormat,
        previous: Option<&[ContentNode]>,
    ) -> String {
        match self.try_convert(content, from, to, previous) {
            Ok(converted) => converted,
            Err(err) => {
                debug!(%from, %to, error = %err, "conversion degraded to identity");
                content.to_string()
            }
        }
    }

    /// Like [`Converter::convert`] with format names, e.g. `"html"`, `"json"`.
    ///
    /// Unknown names fall through to returning the input unchanged.
    pub fn convert_named(
        &self,
        content: &str,
        from: &str,
        to: &str,
        previous: Option<&[ContentNode]>,
    ) -> String {
        match (from.parse::<ContentFormat>(), to.parse::<ContentFormat>()) {
            (Ok(from), Ok(to)) => self.convert(content, from, to, previous),
            _ => {
                debug!(from, to, "unrecognized format pair; returning input");
                content.to_string()
            }
        }
    }

    /// Strict variant of [`Converter::convert`].
    pub fn try_convert(
        &self,
        content: &str,
        from: ContentFormat,
        to: ContentFormat,
        previous: Option<&[ContentNode]>,
    ) -> Result<String, ConvertError> {
        use ContentFormat::*;

        match (from, to) {
            (Html, Json) => self.to_json(&self.parse(content)),
            (Html, Text) => Ok(self.to_text(content)),
            (Json, Html) => Ok(serialize(&nodes_from_json(content)?)),
            (Json, Text) => Ok(self.to_text(&serialize(&nodes_from_json(content)?))),
            (Text, Html) => Ok(self.text_to_html(content, previous)),
            (Text, Json) => {
                let html = self.text_to_html(content, previous);
                self.to_json(&self.parse(&html))
            }
            (Html, Html) | (Text, Text) | (Json, Json) => Ok(content.to_string()),
        }
    }

    /// Serialize an already-structured JSON value (rather than a JSON string) to HTML.
    pub fn value_to_html(&self, value: serde_json::Value) -> Result<String, ConvertError> {
        Ok(serialize(&nodes_from_value(value)?))
    }

    fn text_to_html(&self, text: &str, previous: Option<&[ContentNode]>) -> String {
        match previous {
            Some(previous) => rehydrate::text_to_html(text, previous, &self.rehydrate),
            None => rehydrate::paragraphs_to_html(text),
        }
    }

    fn to_json(&self, nodes: &[ContentNode]) -> Result<String, ConvertError> {
        let json = if self.pretty_json {
            serde_json::to_string_pretty(nodes)
        } else {
            serde_json::to_string(nodes)
        };
        json.map_err(|e| ConvertError::SerializationError(e.to_string()))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::dom()
    }
}

/// Read a JSON node forest from a string.
pub fn nodes_from_json(json: &str) -> Result<Vec<ContentNode>, ConvertError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON node forest from an already-parsed value.
pub fn nodes_from_value(value: serde_json::Value) -> Result<Vec<ContentNode>, ConvertError> {
    Ok(serde_json::from_value(value)?)
}
