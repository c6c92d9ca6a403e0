//! Error types for conversion, import and storage operations

use thiserror::Error;

/// Errors that can occur while converting between content formats
///
/// Only the strict entry points (`Converter::try_convert` and friends) return these.
/// The editor-facing entry points swallow them and hand back the input unchanged.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Format name not recognized
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The JSON node tree could not be read
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    /// The node tree could not be written out
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Errors raised while preparing fetched HTML for import
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The page only ships a client-side loading shell
    #[error("content appears to be a client-side rendered application; only the loading shell is available")]
    ClientRendered {
        /// First characters of the fetched document, for diagnostics
        preview: String,
    },
    /// Nothing left to import after cleanup
    #[error("no importable content found")]
    Empty,
}

/// Errors surfaced by a [`crate::page::PageStore`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("page '{0}' not found")]
    NotFound(String),
    #[error("page slug must not be empty")]
    EmptySlug,
}
