//! Page and document orchestration.
//!
//! [`extract_page`] runs the full per-page pipeline (content area, column
//! segmentation, per-column text, filtering, tagging) against a
//! [`PageSource`]; [`extract_document`] fans it out over every page and
//! assembles the merged document markup.

mod document;
mod page;
mod preprocess;
mod source;

pub use document::{extract_document, FALLBACK_NOTICE};
pub use page::extract_page;
pub use preprocess::{enhance_or_original, NoopPreprocessor, Preprocessor};
pub use source::PageSource;

use crate::layout::{ColumnConfig, DensityConfig};
use crate::text::{FilterOptions, TagOptions};

/// Options controlling the extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Process pages in parallel
    pub parallel: bool,

    /// Content-area detection parameters
    pub density: DensityConfig,

    /// Column segmentation parameters
    pub columns: ColumnConfig,

    /// Noise filtering parameters
    pub filter: FilterOptions,

    /// Structure tagging parameters
    pub structure: TagOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            density: DensityConfig::default(),
            columns: ColumnConfig::default(),
            filter: FilterOptions::default(),
            structure: TagOptions::default(),
        }
    }
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set content-area detection parameters.
    pub fn with_density(mut self, density: DensityConfig) -> Self {
        self.density = density;
        self
    }

    /// Set column segmentation parameters.
    pub fn with_columns(mut self, columns: ColumnConfig) -> Self {
        self.columns = columns;
        self
    }

    /// Set noise filtering parameters.
    pub fn with_filter(mut self, filter: FilterOptions) -> Self {
        self.filter = filter;
        self
    }

    /// Set structure tagging parameters.
    pub fn with_structure(mut self, structure: TagOptions) -> Self {
        self.structure = structure;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new()
            .with_parallel(false)
            .with_columns(ColumnConfig {
                assume_multi_column: false,
                ..ColumnConfig::default()
            });
        assert!(!options.parallel);
        assert!(!options.columns.assume_multi_column);
    }
}
