//! Document orchestration: fan out over pages, assemble merged markup.

use rayon::prelude::*;

use super::{extract_page, ExtractOptions, PageSource};
use crate::model::{DocumentResult, PageResult};

/// Notice emitted when a document yields no text but carries images.
pub const FALLBACK_NOTICE: &str =
    "This document contains no extractable text. It appears to be image-only; OCR is required to read its contents.";

/// Extract every page of a document and assemble the merged markup.
///
/// Pages are processed in parallel when the options ask for it; results
/// are collected in page order either way. Individual page failures
/// surface as empty pages, so this function always returns a result for
/// every page the source reports.
pub fn extract_document<S: PageSource + Sync>(
    source: &S,
    options: &ExtractOptions,
) -> DocumentResult {
    let count = source.page_count();
    log::debug!(
        "extracting {count} page(s), parallel={}",
        options.parallel
    );

    let pages: Vec<PageResult> = if options.parallel {
        (0..count)
            .into_par_iter()
            .map(|i| extract_page(source, i, options))
            .collect()
    } else {
        (0..count).map(|i| extract_page(source, i, options)).collect()
    };

    let markdown = assemble_markdown(&pages);
    DocumentResult::new(pages, markdown)
}

fn assemble_markdown(pages: &[PageResult]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for page in pages {
        if !page.is_text_empty() {
            parts.push(page.text.trim().to_string());
        }
        for table in &page.tables {
            let markup = table.to_markup();
            if !markup.is_empty() {
                parts.push(markup);
            }
        }
    }

    if parts.is_empty() && pages.iter().any(|p| p.has_images()) {
        return FALLBACK_NOTICE.to_string();
    }

    parts.join("\n\n")
}
