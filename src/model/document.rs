//! Document-level result type.

use super::PageResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The merged result for a whole document: per-page results in page order
/// plus the final concatenated markup text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Pages in document order
    pub pages: Vec<PageResult>,

    /// Final merged markup for the document
    pub markdown: String,
}

impl DocumentResult {
    /// Create a document result.
    pub fn new(pages: Vec<PageResult>, markdown: String) -> Self {
        Self { pages, markdown }
    }

    /// Number of processed pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total characters across all page texts.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.char_count).sum()
    }

    /// Whether every page produced empty text.
    pub fn is_text_empty(&self) -> bool {
        self.pages.iter().all(|p| p.is_text_empty())
    }

    /// Whether any page carries image records.
    pub fn has_images(&self) -> bool {
        self.pages.iter().any(|p| p.has_images())
    }

    /// Serialize the result to compact JSON. Raw image bytes are omitted.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the result to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
