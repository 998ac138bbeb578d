//! End-to-end pipeline tests against an in-memory page source.

use relayout::error::{Error, Result};
use relayout::layout::ColumnConfig;
use relayout::model::{BoundingBox, ImageRecord, PageGeometry, TextBlock};
use relayout::{
    extract_document, extract_page, ExtractOptions, PageSource,
};
use relayout::extract::FALLBACK_NOTICE;

const PAGE_WIDTH: f32 = 600.0;
const PAGE_HEIGHT: f32 = 800.0;

/// What a mock page looks like to the pipeline.
#[derive(Clone, Copy)]
enum MockPage {
    /// Two text columns separated by a clear vertical band
    TwoColumn,
    /// Full-width text blocks with no internal gap
    FullWidth,
    /// A scanned page: one image block, no text
    ImageOnly,
    /// Geometry cannot be read at all
    Broken,
}

struct MockSource {
    pages: Vec<MockPage>,
}

impl MockSource {
    fn new(pages: Vec<MockPage>) -> Self {
        Self { pages }
    }
}

fn column_blocks(x0: f32, x1: f32) -> impl Iterator<Item = TextBlock> {
    (0..4).map(move |i| {
        let y = 100.0 + i as f32 * 150.0;
        TextBlock::text(BoundingBox::new(x0, y, x1, y + 100.0))
    })
}

impl PageSource for MockSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn geometry(&self, page: usize) -> Result<PageGeometry> {
        let blocks = match self.pages[page] {
            MockPage::TwoColumn => column_blocks(60.0, 280.0)
                .chain(column_blocks(320.0, 560.0))
                .collect(),
            MockPage::FullWidth => column_blocks(60.0, 560.0).collect(),
            MockPage::ImageOnly => vec![TextBlock::image(BoundingBox::new(
                0.0,
                0.0,
                PAGE_WIDTH,
                PAGE_HEIGHT,
            ))],
            MockPage::Broken => {
                return Err(Error::Geometry("unreadable layout stream".to_string()))
            }
        };
        Ok(PageGeometry::new(PAGE_WIDTH, PAGE_HEIGHT, blocks))
    }

    fn region_text(&self, page: usize, region: &BoundingBox) -> Result<String> {
        match self.pages[page] {
            MockPage::ImageOnly | MockPage::Broken => Ok(String::new()),
            _ => {
                if region.x0 < 100.0 && region.x1 > 500.0 {
                    Ok("A single stream of prose covering the full measure of the page."
                        .to_string())
                } else if region.x1 <= 320.0 {
                    Ok("The left column opens with a long discussion of ordering.\n7\nIt continues with an argu-\nment that spans broken lines.".to_string())
                } else {
                    Ok("Conclusion\nThe right column closes the page with final remarks."
                        .to_string())
                }
            }
        }
    }

    fn images(&self, page: usize) -> Result<Vec<ImageRecord>> {
        match self.pages[page] {
            MockPage::ImageOnly => Ok(vec![ImageRecord::new(vec![0x89, 0x50, 0x4E], "png")]),
            _ => Ok(Vec::new()),
        }
    }
}

#[test]
fn test_two_column_page_reads_left_then_right() {
    let source = MockSource::new(vec![MockPage::TwoColumn]);
    let page = extract_page(&source, 0, &ExtractOptions::default());

    let left = page.text.find("left column").expect("left column text");
    let right = page.text.find("right column").expect("right column text");
    assert!(left < right);
}

#[test]
fn test_noise_dropped_and_hyphenation_repaired() {
    let source = MockSource::new(vec![MockPage::TwoColumn]);
    let page = extract_page(&source, 0, &ExtractOptions::default());

    assert!(!page.text.contains('7'));
    assert!(page.text.contains("argument"));
    assert!(!page.text.contains("argu-"));
}

#[test]
fn test_section_heading_tagged() {
    let source = MockSource::new(vec![MockPage::TwoColumn]);
    let page = extract_page(&source, 0, &ExtractOptions::default());

    assert!(page.text.contains("\n## Conclusion\n"));
}

#[test]
fn test_full_width_page_splits_at_midpoint_by_default() {
    let source = MockSource::new(vec![MockPage::FullWidth]);
    let page = extract_page(&source, 0, &ExtractOptions::default());

    // No qualifying gap, so the area is split in two; neither half spans
    // the full measure.
    assert!(!page.text.contains("full measure"));
}

#[test]
fn test_full_width_page_single_column_when_configured() {
    let source = MockSource::new(vec![MockPage::FullWidth]);
    let options = ExtractOptions::new().with_columns(ColumnConfig {
        assume_multi_column: false,
        ..ColumnConfig::default()
    });
    let page = extract_page(&source, 0, &options);

    assert!(page.text.contains("full measure"));
}

#[test]
fn test_broken_page_yields_empty_result() {
    let source = MockSource::new(vec![MockPage::Broken]);
    let page = extract_page(&source, 0, &ExtractOptions::default());

    assert_eq!(page.number, 1);
    assert!(page.is_text_empty());
    assert_eq!(page.char_count, 0);
}

#[test]
fn test_document_preserves_page_order_in_parallel() {
    let source = MockSource::new(vec![
        MockPage::TwoColumn,
        MockPage::TwoColumn,
        MockPage::TwoColumn,
    ]);
    let doc = extract_document(&source, &ExtractOptions::default());

    assert_eq!(doc.page_count(), 3);
    for (i, page) in doc.pages.iter().enumerate() {
        assert_eq!(page.number, i + 1);
    }
}

#[test]
fn test_mixed_document_survives_bad_pages() {
    let source = MockSource::new(vec![
        MockPage::TwoColumn,
        MockPage::ImageOnly,
        MockPage::Broken,
    ]);
    let doc = extract_document(&source, &ExtractOptions::new().with_parallel(false));

    assert_eq!(doc.page_count(), 3);
    assert!(!doc.pages[0].is_text_empty());
    assert!(doc.pages[1].is_text_empty());
    assert!(doc.pages[1].has_images());
    assert!(doc.pages[2].is_text_empty());

    assert!(doc.markdown.contains("left column"));
    assert!(!doc.markdown.contains(FALLBACK_NOTICE));
}

#[test]
fn test_image_only_document_reports_fallback_notice() {
    let source = MockSource::new(vec![MockPage::ImageOnly, MockPage::ImageOnly]);
    let doc = extract_document(&source, &ExtractOptions::default());

    assert!(doc.is_text_empty());
    assert!(doc.has_images());
    assert_eq!(doc.markdown, FALLBACK_NOTICE);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let source = MockSource::new(vec![MockPage::TwoColumn, MockPage::FullWidth]);
    let parallel = extract_document(&source, &ExtractOptions::default());
    let sequential = extract_document(&source, &ExtractOptions::new().with_parallel(false));

    assert_eq!(parallel.markdown, sequential.markdown);
    assert_eq!(parallel.page_count(), sequential.page_count());
}
