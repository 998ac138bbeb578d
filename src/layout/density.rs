//! Content-area detection via a horizontal text-density profile.
//!
//! The page is partitioned into equal-width vertical strips; every text
//! block deposits its area into the strips it overlaps. The content box
//! spans the strips whose accumulated score clears a fraction of the peak,
//! which excludes margins and narrow sidebars that carry little text area.

use super::{Detection, FallbackReason};
use crate::model::{BoundingBox, TextBlock};

/// Tuning constants for content-area detection.
///
/// Defaults are calibrated against English academic-paper layouts; they are
/// configurable rather than hard-coded because the trade-offs (sidebar
/// exclusion vs. caption loss) are layout-dependent.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    /// Number of equal-width strips across the page
    pub strips: usize,

    /// Significance threshold as a fraction of the peak strip score
    pub threshold_ratio: f32,

    /// Left edges inside this fraction of the page width are treated as
    /// sidebar bleed-through
    pub sidebar_zone: f32,

    /// Where the left edge is forced to when sidebar bleed is suspected,
    /// as a fraction of page width
    pub sidebar_indent: f32,

    /// Fraction of page height excluded at the top (running headers)
    pub header_clip: f32,

    /// Fraction of page height excluded at the bottom (running footers)
    pub footer_clip: f32,

    /// Outward x expansion, as a fraction of one strip width, to avoid
    /// cropping glyphs at the detected boundary
    pub edge_margin_ratio: f32,

    /// Left edge of the fixed-margin fallback box, as a fraction of width
    pub fallback_left: f32,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            strips: 20,
            threshold_ratio: 0.3,
            sidebar_zone: 0.10,
            sidebar_indent: 0.12,
            header_clip: 0.05,
            footer_clip: 0.05,
            edge_margin_ratio: 0.3,
            fallback_left: 0.12,
        }
    }
}

/// Horizontal text-density profile: per-strip accumulated block area.
///
/// Transient — computed once per page and discarded after the content box
/// is derived.
#[derive(Debug, Clone)]
pub struct DensityProfile {
    scores: Vec<f32>,
    strip_width: f32,
}

impl DensityProfile {
    /// Create an all-zero profile over `page_width` with `strips` strips.
    pub fn new(page_width: f32, strips: usize) -> Self {
        Self {
            scores: vec![0.0; strips],
            strip_width: page_width / strips as f32,
        }
    }

    /// Strip width in page units.
    pub fn strip_width(&self) -> f32 {
        self.strip_width
    }

    /// Add a block's area to every strip its horizontal extent overlaps.
    pub fn accumulate(&mut self, bbox: &BoundingBox) {
        let area = bbox.area();
        if area <= 0.0 {
            return;
        }
        let len = self.scores.len();
        let start = (bbox.x0 / self.strip_width).floor().max(0.0) as usize;
        let end = (bbox.x1 / self.strip_width).floor() as usize;
        for score in self
            .scores
            .iter_mut()
            .take((end + 1).min(len))
            .skip(start)
        {
            *score += area;
        }
    }

    /// The largest strip score.
    pub fn max_score(&self) -> f32 {
        self.scores.iter().copied().fold(0.0, f32::max)
    }

    /// Indices of the leftmost and rightmost strips scoring strictly above
    /// `threshold`, or `None` if no strip does.
    pub fn significant_range(&self, threshold: f32) -> Option<(usize, usize)> {
        let first = self.scores.iter().position(|&s| s > threshold)?;
        let last = self.scores.iter().rposition(|&s| s > threshold)?;
        Some((first, last))
    }
}

/// Detect the page's main content box from block geometry.
///
/// Returns `None` when the page has no text blocks or the profile carries
/// no signal; the caller falls back to [`default_content_area`].
pub fn detect_content_area(
    blocks: &[TextBlock],
    page_width: f32,
    page_height: f32,
    config: &DensityConfig,
) -> Option<BoundingBox> {
    detect_inner(blocks, page_width, page_height, config).ok()
}

/// Detect the content box, or fall back to the fixed-margin default box
/// with an explicit reason.
pub fn detect_or_default(
    blocks: &[TextBlock],
    page_width: f32,
    page_height: f32,
    config: &DensityConfig,
) -> Detection<BoundingBox> {
    match detect_inner(blocks, page_width, page_height, config) {
        Ok(bbox) => {
            log::debug!(
                "content area: x=[{:.1}, {:.1}] y=[{:.1}, {:.1}]",
                bbox.x0,
                bbox.x1,
                bbox.y0,
                bbox.y1
            );
            Detection::Detected(bbox)
        }
        Err(reason) => {
            log::debug!("content area detection fell back: {:?}", reason);
            Detection::Degraded {
                value: default_content_area(page_width, page_height, config),
                reason,
            }
        }
    }
}

/// The fixed-margin fallback content box: left sidebar and header/footer
/// bands excluded by fixed fractions of the page dimensions.
pub fn default_content_area(
    page_width: f32,
    page_height: f32,
    config: &DensityConfig,
) -> BoundingBox {
    BoundingBox::new(
        page_width * config.fallback_left,
        page_height * config.header_clip,
        page_width,
        page_height * (1.0 - config.footer_clip),
    )
}

fn detect_inner(
    blocks: &[TextBlock],
    page_width: f32,
    page_height: f32,
    config: &DensityConfig,
) -> Result<BoundingBox, FallbackReason> {
    if !(page_width > 0.0) || !(page_height > 0.0) || config.strips == 0 {
        return Err(FallbackReason::DegenerateGeometry);
    }

    let text_blocks: Vec<&TextBlock> = blocks.iter().filter(|b| b.is_text()).collect();
    if text_blocks.is_empty() {
        return Err(FallbackReason::NoTextBlocks);
    }

    let mut profile = DensityProfile::new(page_width, config.strips);
    for block in &text_blocks {
        profile.accumulate(&block.bbox);
    }

    let max_density = profile.max_score();
    if max_density <= 0.0 {
        return Err(FallbackReason::ZeroDensity);
    }

    let threshold = max_density * config.threshold_ratio;
    let (first, last) = profile
        .significant_range(threshold)
        .ok_or(FallbackReason::NoSignificantStrips)?;

    let strip_width = profile.strip_width();
    let mut x_min = first as f32 * strip_width;
    let mut x_max = (last + 1) as f32 * strip_width;

    // A left edge this close to the page edge is a narrow sidebar bleeding
    // into the profile, not real body content.
    if x_min < page_width * config.sidebar_zone {
        x_min = page_width * config.sidebar_indent;
    }

    // Y range from block extents, clipped to exclude header/footer bands
    // but never tighter than the extents themselves.
    let min_y0 = text_blocks
        .iter()
        .map(|b| b.bbox.y0)
        .fold(f32::INFINITY, f32::min);
    let max_y1 = text_blocks
        .iter()
        .map(|b| b.bbox.y1)
        .fold(f32::NEG_INFINITY, f32::max);
    let y_min = min_y0.max(page_height * config.header_clip);
    let y_max = max_y1.min(page_height * (1.0 - config.footer_clip));

    // Expand outward slightly so boundary glyphs are not cropped, without
    // exceeding the physical page box.
    let margin = strip_width * config.edge_margin_ratio;
    x_min = (x_min - margin).max(0.0);
    x_max = (x_max + margin).min(page_width);

    if x_min >= x_max || y_min >= y_max {
        return Err(FallbackReason::DegenerateGeometry);
    }

    Ok(BoundingBox::new(x_min, y_min, x_max, y_max))
}
