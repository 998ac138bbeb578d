//! Error types for the relayout library.

use std::io;
use thiserror::Error;

/// Result type alias for relayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while driving the extraction pipeline.
///
/// Detection failures (content area, columns) are deliberately NOT errors:
/// they degrade to documented fallbacks and are reported through
/// [`crate::layout::Detection`] and [`crate::layout::ColumnOrigin`] instead.
/// Only the external seams — opening a source, pulling text for a region —
/// are genuinely fallible.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source bytes.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document source could not be opened at all.
    ///
    /// This is the only fatal failure mode: nothing was extracted.
    #[error("Document source unavailable: {0}")]
    SourceUnavailable(String),

    /// The external text extraction failed for a specific region.
    #[error("Region text extraction failed: {0}")]
    RegionExtract(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (source has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Page geometry (blocks, dimensions) could not be obtained.
    #[error("Page geometry unavailable: {0}")]
    Geometry(String),

    /// Result serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SourceUnavailable("truncated file".to_string());
        assert_eq!(
            err.to_string(),
            "Document source unavailable: truncated file"
        );

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (source has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
