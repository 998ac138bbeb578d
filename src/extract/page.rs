//! Single-page pipeline: content area, columns, per-column text, cleanup.

use super::{ExtractOptions, PageSource};
use crate::error::Result;
use crate::layout::{detect_columns, detect_or_default};
use crate::model::PageResult;
use crate::text::{tag_structure, NoiseFilter};

/// Run the full pipeline for one zero-based page index.
///
/// Page-level failures never propagate: a page whose geometry cannot be
/// read yields an empty [`PageResult`] carrying its 1-indexed page number,
/// and a column whose text cannot be extracted is skipped while the
/// remaining columns survive.
pub fn extract_page<S: PageSource>(
    source: &S,
    index: usize,
    options: &ExtractOptions,
) -> PageResult {
    let number = index + 1;
    match assemble(source, index, options) {
        Ok(page) => page,
        Err(e) => {
            log::error!("page {number}: extraction failed: {e}");
            PageResult::empty(number)
        }
    }
}

fn assemble<S: PageSource>(
    source: &S,
    index: usize,
    options: &ExtractOptions,
) -> Result<PageResult> {
    let number = index + 1;
    let geometry = source.geometry(index)?;

    let content = detect_or_default(
        &geometry.blocks,
        geometry.width,
        geometry.height,
        &options.density,
    );
    let columns = detect_columns(&geometry.blocks, content.value(), &options.columns);
    log::debug!(
        "page {number}: {} column(s), origin {:?}",
        columns.len(),
        columns.origin
    );

    let filter = NoiseFilter::new(options.filter.clone());
    let mut parts: Vec<String> = Vec::new();
    for region in columns.iter() {
        match source.region_text(index, region) {
            Ok(raw) => {
                let cleaned = filter.clean(&raw);
                if !cleaned.is_empty() {
                    parts.push(cleaned);
                }
            }
            Err(e) => {
                log::warn!("page {number}: column text extraction failed: {e}");
            }
        }
    }

    let merged = parts.join("\n\n");
    let tagged = tag_structure(&merged, &options.structure);

    let tables = match source.tables(index) {
        Ok(tables) => tables,
        Err(e) => {
            log::warn!("page {number}: table extraction failed: {e}");
            Vec::new()
        }
    };
    let images = match source.images(index) {
        Ok(images) => images,
        Err(e) => {
            log::warn!("page {number}: image extraction failed: {e}");
            Vec::new()
        }
    };

    Ok(PageResult::new(number, tagged, tables, images))
}
