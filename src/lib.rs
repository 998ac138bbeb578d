//! Reading-order text reconstruction for laid-out documents.
//!
//! Page parsers hand back text blocks in storage order, which rarely
//! matches reading order on multi-column pages. This crate rebuilds the
//! reading order from block geometry alone: it finds the true content
//! area of each page with a vertical density profile, splits it into
//! columns by scanning for empty vertical bands, pulls the text of each
//! column left to right, then strips layout noise, repairs hyphen-broken
//! words and tags section structure in the merged result.
//!
//! The pipeline is format-agnostic: anything that can report page block
//! geometry and the text inside a rectangle implements [`PageSource`]
//! and drives the whole pipeline.
//!
//! # Quick start
//!
//! ```
//! use relayout::error::Result;
//! use relayout::model::{BoundingBox, PageGeometry, TextBlock};
//! use relayout::{extract_document, ExtractOptions, PageSource};
//!
//! struct Fixture;
//!
//! impl PageSource for Fixture {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!
//!     fn geometry(&self, _page: usize) -> Result<PageGeometry> {
//!         Ok(PageGeometry::new(
//!             600.0,
//!             800.0,
//!             vec![
//!                 TextBlock::text(BoundingBox::new(50.0, 100.0, 280.0, 700.0)),
//!                 TextBlock::text(BoundingBox::new(320.0, 100.0, 550.0, 700.0)),
//!             ],
//!         ))
//!     }
//!
//!     fn region_text(&self, _page: usize, region: &BoundingBox) -> Result<String> {
//!         Ok(if region.x0 < 300.0 {
//!             "Text from the left column, read first in order.".to_string()
//!         } else {
//!             "Text from the right column, read second in order.".to_string()
//!         })
//!     }
//! }
//!
//! let doc = extract_document(&Fixture, &ExtractOptions::default());
//! assert!(doc.markdown.contains("left column"));
//! ```

pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod text;

pub use error::{Error, Result};
pub use extract::{extract_document, extract_page, ExtractOptions, PageSource};
pub use model::{DocumentResult, PageResult};
