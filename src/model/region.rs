//! Normalized page regions and their classification labels.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// What kind of content a region holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// A text block
    Text,
    /// An image placement
    Image,
    /// A vector drawing
    Vector,
}

/// Classification attached to a region by the classifier.
///
/// `Body` keeps the region in the content box; every other label excludes
/// it from margin and indentation measurement. Labels are assigned in a
/// fixed rule order (page number, trailing whitespace, header, footer); a
/// region matching several exclusion rules is excluded either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLabel {
    /// Real page content, kept in the content box
    #[default]
    Body,
    /// Running header near the top edge
    Header,
    /// Running footer near the bottom edge
    Footer,
    /// A lone page number
    PageNumber,
    /// A whitespace-only block trailing the content
    TrailingWhitespace,
}

/// One discrete unit of page content.
///
/// Regions are produced fresh per page by the extractor and never mutated
/// afterwards except for the classifier attaching a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Bounding rectangle
    pub bounds: Rect,
    /// Content kind
    pub kind: RegionKind,
    /// Trimmed text, present only for text regions
    pub text: Option<String>,
    /// Classification label
    #[serde(default)]
    pub label: RegionLabel,
}

impl Region {
    /// Create a text region; surrounding whitespace is trimmed off the
    /// text but the bounds are kept as reported.
    pub fn text(bounds: Rect, text: &str) -> Self {
        Self {
            bounds,
            kind: RegionKind::Text,
            text: Some(text.trim().to_string()),
            label: RegionLabel::Body,
        }
    }

    /// Create an image region.
    pub fn image(bounds: Rect) -> Self {
        Self {
            bounds,
            kind: RegionKind::Image,
            text: None,
            label: RegionLabel::Body,
        }
    }

    /// Create a vector-drawing region.
    pub fn vector(bounds: Rect) -> Self {
        Self {
            bounds,
            kind: RegionKind::Vector,
            text: None,
            label: RegionLabel::Body,
        }
    }

    /// The trimmed text of the region, or "" for non-text regions.
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Whether the label excludes this region from the content box.
    pub fn is_excluded(&self) -> bool {
        self.label != RegionLabel::Body
    }
}
