//! Column segmentation via horizontal occupancy gaps.
//!
//! Inside a detected content area, reading columns are separated by runs of
//! strips no block touches. A fine occupancy histogram locates those runs;
//! qualifying gap centers become cut points. When the signal is too weak to
//! scan, segmentation degrades to a two-way midpoint split — it never fails
//! the page.

use super::FallbackReason;
use crate::model::{BoundingBox, TextBlock};
use serde::{Deserialize, Serialize};

/// Tuning constants for column-gap detection.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    /// Number of occupancy strips across the content width
    pub strips: usize,

    /// Minimum zero-occupancy run length, in strips, to qualify as a gap
    pub min_gap_strips: usize,

    /// Gap centers at or left of this fraction of the content width are
    /// margin artifacts, not column separators
    pub gap_center_low: f32,

    /// Gap centers at or right of this fraction of the content width are
    /// margin artifacts
    pub gap_center_high: f32,

    /// Horizontal tolerance, in page units, when restricting blocks to the
    /// content area
    pub block_tolerance: f32,

    /// Minimum number of in-area blocks required to run the gap scan
    pub min_blocks: usize,

    /// When the gap scan finds no separator: assume a two-column layout
    /// (midpoint split) if true, or a single column if false
    pub assume_multi_column: bool,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            strips: 200,
            min_gap_strips: 8,
            gap_center_low: 0.2,
            gap_center_high: 0.8,
            block_tolerance: 10.0,
            min_blocks: 3,
            assume_multi_column: true,
        }
    }
}

/// How a [`ColumnSet`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrigin {
    /// Cut points came from the occupancy gap scan
    GapScan,
    /// The gap scan proved a single undivided region
    SingleColumn,
    /// Degraded to the two-way midpoint split
    MidpointFallback(FallbackReason),
}

/// An ordered left-to-right partition of a content area into columns.
///
/// Invariants: boxes are non-overlapping in x and contiguous — each box's
/// left edge equals the previous box's right edge (or the content area's
/// left edge) — and the set holds at least one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSet {
    /// Column boxes, left to right, spanning the full content height
    pub columns: Vec<BoundingBox>,

    /// How this partition was produced
    pub origin: ColumnOrigin,
}

impl ColumnSet {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set is empty. Never true for a set produced by
    /// [`detect_columns`].
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether this partition came from a fallback rather than the scan.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, ColumnOrigin::MidpointFallback(_))
    }

    /// Iterate over the column boxes, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &BoundingBox> {
        self.columns.iter()
    }
}

/// The degraded-mode partition: two columns split at the horizontal
/// midpoint of the content area.
pub fn midpoint_split(content: &BoundingBox) -> Vec<BoundingBox> {
    let mid = content.mid_x();
    vec![
        content.with_x_span(content.x0, mid),
        content.with_x_span(mid, content.x1),
    ]
}

/// Segment the content area into reading columns.
///
/// Degrades to the midpoint split on missing geometry, too few in-area
/// blocks, or a degenerate content box; this function never fails.
pub fn detect_columns(
    blocks: &[TextBlock],
    content: &BoundingBox,
    config: &ColumnConfig,
) -> ColumnSet {
    let fallback = |reason: FallbackReason| ColumnSet {
        columns: midpoint_split(content),
        origin: ColumnOrigin::MidpointFallback(reason),
    };

    if content.width() <= 0.0 || config.strips == 0 {
        return fallback(FallbackReason::DegenerateGeometry);
    }
    if blocks.iter().all(|b| !b.is_text()) {
        return fallback(FallbackReason::NoTextBlocks);
    }

    // Restrict to text blocks whose horizontal extent lies within the
    // content area, with a small tolerance for ragged edges.
    let tol = config.block_tolerance;
    let in_area: Vec<&TextBlock> = blocks
        .iter()
        .filter(|b| b.is_text() && b.bbox.x0 >= content.x0 - tol && b.bbox.x1 <= content.x1 + tol)
        .collect();

    if in_area.len() < config.min_blocks {
        return fallback(FallbackReason::TooFewBlocks);
    }

    let cuts = scan_gaps(&in_area, content, config);
    log::debug!(
        "column scan: {} in-area blocks, {} qualifying gaps",
        in_area.len(),
        cuts.len()
    );

    if cuts.is_empty() {
        // Academic layouts are assumed multi-column unless configured
        // otherwise: an empty scan defaults to the midpoint split.
        if config.assume_multi_column {
            return fallback(FallbackReason::NoQualifyingGaps);
        }
        return ColumnSet {
            columns: vec![*content],
            origin: ColumnOrigin::SingleColumn,
        };
    }

    let mut columns = Vec::with_capacity(cuts.len() + 1);
    let mut prev_x = content.x0;
    for cut in cuts {
        columns.push(content.with_x_span(prev_x, cut));
        prev_x = cut;
    }
    columns.push(content.with_x_span(prev_x, content.x1));

    ColumnSet {
        columns,
        origin: ColumnOrigin::GapScan,
    }
}

/// Scan the occupancy histogram for qualifying column gaps and return the
/// cut-point x coordinates, left to right.
fn scan_gaps(blocks: &[&TextBlock], content: &BoundingBox, config: &ColumnConfig) -> Vec<f32> {
    let content_width = content.width();
    let strip_width = content_width / config.strips as f32;
    let mut occupancy = vec![0usize; config.strips];

    for block in blocks {
        let start = ((block.bbox.x0 - content.x0) / strip_width).floor().max(0.0) as usize;
        let end = ((block.bbox.x1 - content.x0) / strip_width).floor() as usize;
        for slot in occupancy
            .iter_mut()
            .take((end + 1).min(config.strips))
            .skip(start)
        {
            *slot += 1;
        }
    }

    let mut cuts = Vec::new();
    let mut run_start = None;

    let consider = |run_start: usize, run_end: usize, cuts: &mut Vec<f32>| {
        let run_len = run_end - run_start;
        if run_len < config.min_gap_strips {
            return;
        }
        let center = (run_start as f32 + run_len as f32 / 2.0) * strip_width + content.x0;
        // Gaps near the edges are margin artifacts, not column separators.
        let low = content.x0 + content_width * config.gap_center_low;
        let high = content.x1 - content_width * (1.0 - config.gap_center_high);
        if center > low && center < high {
            cuts.push(center);
        }
    };

    for (i, &occ) in occupancy.iter().enumerate() {
        if occ == 0 {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            consider(start, i, &mut cuts);
        }
    }
    if let Some(start) = run_start {
        consider(start, occupancy.len(), &mut cuts);
    }

    cuts
}
