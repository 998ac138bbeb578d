//! Per-page extraction results.

use super::{RawTable, TableSummary};
use serde::{Deserialize, Serialize};

/// An opaque image record attached to a page.
///
/// The pipeline never decodes these; they are keyed by page and passed
/// through verbatim into the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Raw image bytes
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,

    /// Format tag (e.g. "png", "jpeg")
    pub format: String,
}

impl ImageRecord {
    /// Create an image record.
    pub fn new(data: Vec<u8>, format: impl Into<String>) -> Self {
        Self {
            data,
            format: format.into(),
        }
    }
}

/// The result of processing a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-indexed)
    pub number: usize,

    /// Merged, cleaned, structure-tagged text for the page
    pub text: String,

    /// Character count of the page text
    pub char_count: usize,

    /// Raw table records, passed through from the source
    pub tables: Vec<RawTable>,

    /// Image records, passed through from the source
    pub images: Vec<ImageRecord>,
}

impl PageResult {
    /// Create a page result. The character count is derived from the text.
    pub fn new(
        number: usize,
        text: String,
        tables: Vec<RawTable>,
        images: Vec<ImageRecord>,
    ) -> Self {
        let char_count = text.chars().count();
        Self {
            number,
            text,
            char_count,
            tables,
            images,
        }
    }

    /// An empty result for a page whose assembly failed: no text, zero
    /// statistics, no tables or images.
    pub fn empty(number: usize) -> Self {
        Self {
            number,
            text: String::new(),
            char_count: 0,
            tables: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Number of tables on the page.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Row/column counts for every table on the page.
    pub fn table_summaries(&self) -> Vec<TableSummary> {
        self.tables.iter().map(|t| t.summary()).collect()
    }

    /// Whether the page produced no text.
    pub fn is_text_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the page carries any image records.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_result_char_count() {
        let page = PageResult::new(1, "héllo".to_string(), vec![], vec![]);
        assert_eq!(page.char_count, 5);
        assert!(!page.is_text_empty());
    }

    #[test]
    fn test_page_result_empty() {
        let page = PageResult::empty(3);
        assert_eq!(page.number, 3);
        assert_eq!(page.char_count, 0);
        assert!(page.is_text_empty());
        assert!(!page.has_images());
        assert_eq!(page.table_count(), 0);
    }

    #[test]
    fn test_page_result_with_images_and_tables() {
        let table = RawTable::from_strings([vec!["A"], vec!["1"], vec!["2"]]);
        let page = PageResult::new(
            1,
            String::new(),
            vec![table],
            vec![ImageRecord::new(vec![0xFF, 0xD8], "jpeg")],
        );
        assert!(page.is_text_empty());
        assert!(page.has_images());
        assert_eq!(page.table_count(), 1);
        assert_eq!(page.table_summaries()[0].rows, 2);
    }
}
