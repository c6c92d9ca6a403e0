//! The content formats a page can be viewed and edited in

use crate::error::ConvertError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One representation of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    /// HTML markup, the editor's canonical view
    Html,
    /// Plain text with markup stripped
    Text,
    /// The node forest serialized as JSON, the persisted view
    Json,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 3] = [ContentFormat::Html, ContentFormat::Text, ContentFormat::Json];

    pub fn name(self) -> &'static str {
        match self {
            ContentFormat::Html => "html",
            ContentFormat::Text => "text",
            ContentFormat::Json => "json",
        }
    }

    /// File extensions associated with this format, without the leading dot.
    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            ContentFormat::Html => &["html", "htm"],
            ContentFormat::Text => &["txt", "text"],
            ContentFormat::Json => &["json"],
        }
    }

    /// Detect the format from a filename's extension.
    ///
    /// Extensions are matched case-sensitively, as returned by [`Path::extension`].
    pub fn detect_from_filename(filename: &str) -> Option<ContentFormat> {
        let extension = Path::new(filename).extension().and_then(|ext| ext.to_str())?;
        Self::ALL
            .into_iter()
            .find(|format| format.file_extensions().contains(&extension))
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" | "htm" => Ok(ContentFormat::Html),
            "text" | "txt" => Ok(ContentFormat::Text),
            "json" => Ok(ContentFormat::Json),
            other => Err(ConvertError::FormatNotFound(other.to_string())),
        }
    }
}
