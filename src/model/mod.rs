//! Data model for layout-analysis inputs and extraction results.
//!
//! Inputs (blocks, geometry, tables, images) arrive from an external page
//! parser; outputs are the per-page and per-document results the pipeline
//! assembles. All types are plain serde-derived values.

mod bbox;
mod block;
mod document;
mod page;
mod table;

pub use bbox::BoundingBox;
pub use block::{BlockKind, PageGeometry, TextBlock};
pub use document::DocumentResult;
pub use page::{ImageRecord, PageResult};
pub use table::{RawTable, TableSummary};
