//! Bounding box value type.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page units.
///
/// Invariant: `x0 <= x1` and `y0 <= y1`. Boxes are pure values — detection
/// steps never mutate a box in place, they produce a refined copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box. Coordinates are normalized so that
    /// `x0 <= x1` and `y0 <= y1`.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Box area.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Whether the box has zero (or effectively zero) extent in either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= f32::EPSILON || self.height() <= f32::EPSILON
    }

    /// Whether an x coordinate falls within the horizontal span.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x0 && x <= self.x1
    }

    /// Whether this box lies entirely within `other`.
    pub fn within(&self, other: &BoundingBox) -> bool {
        self.x0 >= other.x0 && self.x1 <= other.x1 && self.y0 >= other.y0 && self.y1 <= other.y1
    }

    /// A copy with a different horizontal span, keeping the vertical span.
    pub fn with_x_span(&self, x0: f32, x1: f32) -> Self {
        Self::new(x0, self.y0, x1, self.y1)
    }
}
