//! Per-page raw content reported by the renderer.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// A positioned run of text on a page.
///
/// The renderer reports text twice, at two granularities: `words` (one item
/// per word token) and `blocks` (one item per text block). Blocks drive
/// region classification and the content box; words drive the word-level
/// indentation measurement, where a block's left edge may hide a hanging
/// first-line indent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Bounding rectangle of the run
    pub rect: Rect,
    /// Text content as reported (not yet trimmed)
    pub text: String,
}

impl TextItem {
    /// Create a new text item.
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
        }
    }
}

/// Raw content of a single page, as supplied by the external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Word tokens with positions
    #[serde(default)]
    pub words: Vec<TextItem>,

    /// Text blocks with positions
    #[serde(default)]
    pub blocks: Vec<TextItem>,

    /// Image placement rectangles; an image placed twice appears twice
    #[serde(default)]
    pub images: Vec<Rect>,

    /// Vector drawing bounding rectangles
    #[serde(default)]
    pub drawings: Vec<Rect>,
}

impl PageContent {
    /// Create an empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            words: Vec::new(),
            blocks: Vec::new(),
            images: Vec::new(),
            drawings: Vec::new(),
        }
    }

    /// Create an empty page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0)
    }

    /// Create an empty page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0)
    }

    /// Add a text block, mirrored as a single word token.
    ///
    /// Convenience for callers (and tests) whose blocks are single-line;
    /// renderers with real word segmentation should fill `words` and
    /// `blocks` separately.
    pub fn add_text(&mut self, rect: Rect, text: impl Into<String>) {
        let item = TextItem::new(rect, text);
        self.words.push(item.clone());
        self.blocks.push(item);
    }

    /// Add a text block without a word-level mirror.
    pub fn add_block(&mut self, rect: Rect, text: impl Into<String>) {
        self.blocks.push(TextItem::new(rect, text));
    }

    /// Add a word token.
    pub fn add_word(&mut self, rect: Rect, text: impl Into<String>) {
        self.words.push(TextItem::new(rect, text));
    }

    /// Add an image placement.
    pub fn add_image(&mut self, rect: Rect) {
        self.images.push(rect);
    }

    /// Add a vector drawing.
    pub fn add_drawing(&mut self, rect: Rect) {
        self.drawings.push(rect);
    }

    /// Page dimensions as a (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Whether the renderer reported no content at all for this page.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.images.is_empty() && self.drawings.is_empty()
    }
}
