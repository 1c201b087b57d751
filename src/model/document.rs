//! Document-level hand-off types.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PageContent;
use crate::error::{Error, Result};

/// The full content dump of a document, as supplied by the external
/// renderer.
///
/// This is the boundary between pagelint and the renderer collaborator:
/// the renderer serializes its per-page words, blocks, image placements
/// and drawing bounds into this shape (typically as JSON), and the audit
/// engine consumes it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Pages in document order
    pub pages: Vec<PageContent>,
}

impl DocumentContent {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            pages: Vec::new(),
        }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Whether the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageContent) {
        self.pages.push(page);
    }

    /// Load a content dump from a JSON file.
    ///
    /// Failure here is the only fatal condition of a run: the audit never
    /// starts on a document it cannot read.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| Error::unreadable(path, e))
    }

    /// Load a content dump from any reader producing JSON.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_json_str(&data)
    }

    /// Parse a content dump from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| Error::unreadable("<input>", e))
    }
}

impl Default for DocumentContent {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata echoed into the report header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}
