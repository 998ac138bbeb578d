//! Optional image preprocessing hook.
//!
//! Sources that render pages to raster images before extraction can plug
//! in an enhancement step (deskew, contrast, denoise). The hook is
//! advisory: when it declines or fails, the original bytes are used and
//! the pipeline continues.

/// An image enhancement step applied before page analysis.
pub trait Preprocessor {
    /// Enhance raw image bytes. `None` means the step declined or failed;
    /// the caller keeps the original bytes.
    fn enhance(&self, image: &[u8]) -> Option<Vec<u8>>;
}

/// Run a preprocessor over image bytes, keeping the original on decline.
pub fn enhance_or_original<P: Preprocessor>(preprocessor: &P, image: &[u8]) -> Vec<u8> {
    match preprocessor.enhance(image) {
        Some(enhanced) => enhanced,
        None => {
            log::debug!("image enhancement declined, keeping original bytes");
            image.to_vec()
        }
    }
}

/// A preprocessor that always declines.
#[derive(Debug, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    fn enhance(&self, _image: &[u8]) -> Option<Vec<u8>> {
        None
    }
}
