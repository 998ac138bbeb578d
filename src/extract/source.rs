//! Page source abstraction.
//!
//! The pipeline never touches a file format directly; it asks a
//! [`PageSource`] for block geometry and for the text inside a region.
//! Any renderer or parser that can answer those two questions can drive
//! the pipeline.

use crate::error::Result;
use crate::model::{BoundingBox, ImageRecord, PageGeometry, RawTable};

/// Access to the pages of a laid-out document.
///
/// Implementations are expected to be cheap to query repeatedly: the
/// pipeline asks for a page's geometry once, then for the text of each
/// detected column region.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Block geometry for a zero-based page index.
    fn geometry(&self, page: usize) -> Result<PageGeometry>;

    /// Text content of the given region of a page, with the source's own
    /// line breaks preserved.
    fn region_text(&self, page: usize, region: &BoundingBox) -> Result<String>;

    /// Tables detected on a page, if the source supports table detection.
    fn tables(&self, _page: usize) -> Result<Vec<RawTable>> {
        Ok(Vec::new())
    }

    /// Embedded images on a page, if the source exposes them.
    fn images(&self, _page: usize) -> Result<Vec<ImageRecord>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextBlock;

    struct BareSource;

    impl PageSource for BareSource {
        fn page_count(&self) -> usize {
            1
        }

        fn geometry(&self, _page: usize) -> Result<PageGeometry> {
            Ok(PageGeometry::new(
                100.0,
                100.0,
                vec![TextBlock::text(BoundingBox::new(10.0, 10.0, 90.0, 20.0))],
            ))
        }

        fn region_text(&self, _page: usize, _region: &BoundingBox) -> Result<String> {
            Ok("hello".to_string())
        }
    }

    #[test]
    fn test_default_tables_and_images_empty() {
        let source = BareSource;
        assert!(source.tables(0).unwrap().is_empty());
        assert!(source.images(0).unwrap().is_empty());
    }
}
