//! Page geometry inputs: text blocks as supplied by an external page parser.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// Kind of a raw page block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A block containing text
    Text,
    /// A non-text block (image, drawing, ...)
    Image,
}

/// A raw block on a page: a rectangle plus a type flag.
///
/// Read-only input supplied by the external page-parsing capability; it has
/// no lifecycle beyond the page's processing pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block bounding box in page units
    pub bbox: BoundingBox,

    /// Text vs. non-text flag
    pub kind: BlockKind,

    /// Raw line strings inside the block, when the backend provides them
    #[serde(default)]
    pub lines: Vec<String>,
}

impl TextBlock {
    /// Create a text block.
    pub fn text(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            kind: BlockKind::Text,
            lines: Vec::new(),
        }
    }

    /// Create a non-text (image) block.
    pub fn image(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            kind: BlockKind::Image,
            lines: Vec::new(),
        }
    }

    /// Whether this is a text block.
    pub fn is_text(&self) -> bool {
        self.kind == BlockKind::Text
    }
}

/// One page's raw geometry: dimensions plus its blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in page units
    pub width: f32,

    /// Page height in page units
    pub height: f32,

    /// All blocks on the page, text and non-text
    pub blocks: Vec<TextBlock>,
}

impl PageGeometry {
    /// Create page geometry from dimensions and blocks.
    pub fn new(width: f32, height: f32, blocks: Vec<TextBlock>) -> Self {
        Self {
            width,
            height,
            blocks,
        }
    }

    /// Only the text-type blocks.
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(|b| b.is_text())
    }

    /// Whether the page carries any text blocks at all.
    pub fn has_text(&self) -> bool {
        self.blocks.iter().any(|b| b.is_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kinds() {
        let t = TextBlock::text(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        let i = TextBlock::image(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert!(t.is_text());
        assert!(!i.is_text());
    }

    #[test]
    fn test_page_geometry_text_blocks() {
        let geo = PageGeometry::new(
            100.0,
            120.0,
            vec![
                TextBlock::text(BoundingBox::new(10.0, 10.0, 90.0, 20.0)),
                TextBlock::image(BoundingBox::new(10.0, 30.0, 90.0, 100.0)),
            ],
        );
        assert_eq!(geo.text_blocks().count(), 1);
        assert!(geo.has_text());
    }

    #[test]
    fn test_page_geometry_image_only() {
        let geo = PageGeometry::new(
            100.0,
            120.0,
            vec![TextBlock::image(BoundingBox::new(10.0, 10.0, 90.0, 100.0))],
        );
        assert!(!geo.has_text());
    }
}
