//! Stored pages and their derived views
//!
//! A [`PageRecord`] is what gets persisted: metadata plus the node forest. HTML and
//! text are never stored; they are regenerated from the forest on every read so the
//! three views cannot drift apart.

use crate::convert::Converter;
use crate::error::StoreError;
use crate::node::ContentNode;
use crate::text::word_count;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// The persisted shape of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub content: Vec<ContentNode>,
}

/// A page as presented to readers: the record plus its regenerated views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    #[serde(flatten)]
    pub record: PageRecord,
    pub html: String,
    pub text: String,
    pub json: Vec<ContentNode>,
}

/// Summary figures shown in page listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub word_count: usize,
    pub has_content: bool,
}

impl PageRecord {
    /// Regenerate HTML and text from the stored forest.
    pub fn render(&self, converter: &Converter) -> PageView {
        let data = converter.content_data_from_nodes(&self.content);
        PageView {
            record: self.clone(),
            html: data.html,
            text: data.text,
            json: data.json,
        }
    }

    pub fn stats(&self, converter: &Converter) -> ContentStats {
        self.render(converter).stats()
    }
}

impl PageView {
    pub fn stats(&self) -> ContentStats {
        ContentStats {
            word_count: word_count(&self.text),
            has_content: !self.record.content.is_empty(),
        }
    }
}

/// Row store holding page records, keyed by slug.
///
/// Saving an existing slug replaces the record (last write wins).
pub trait PageStore {
    fn load(&self, slug: &str) -> Result<PageRecord, StoreError>;
    fn save(&self, record: PageRecord) -> Result<(), StoreError>;
    /// All stored slugs, sorted.
    fn list(&self) -> Vec<String>;
}

/// In-process [`PageStore`].
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: RwLock<HashMap<String, PageRecord>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self, slug: &str) -> Result<PageRecord, StoreError> {
        let pages = self.pages.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        pages
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    fn save(&self, record: PageRecord) -> Result<(), StoreError> {
        if record.slug.trim().is_empty() {
            return Err(StoreError::EmptySlug);
        }
        let mut pages = self.pages.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        pages.insert(record.slug.clone(), record);
        Ok(())
    }

    fn list(&self) -> Vec<String> {
        let pages = self.pages.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut slugs: Vec<_> = pages.keys().cloned().collect();
        slugs.sort();
        slugs
    }
}
