//! Violations and the draw instructions that mark them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// An RGB color with components in 0..=1, the renderer's color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Red, the marking color for every violation annotation.
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
}

/// One drawing instruction for the annotation sink.
///
/// The engine only computes what to draw and where; the external renderer
/// applies these to the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawOp {
    /// Stroke a rectangle border
    Rect {
        rect: Rect,
        color: Color,
        width: f32,
    },

    /// Stroke a line segment
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },

    /// Insert a text label
    Text {
        at: (f32, f32),
        text: String,
        size: f32,
        color: Color,
    },
}

/// Which rule produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Page margin distances
    Margins,
    /// Paragraph first-line indentation
    Indentation,
    /// Image horizontal alignment
    ImageAlignment,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Margins => write!(f, "margins"),
            RuleKind::Indentation => write!(f, "indentation"),
            RuleKind::ImageAlignment => write!(f, "image alignment"),
        }
    }
}

/// A recorded failure of one page against one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Page number (1-indexed)
    pub page: u32,
    /// The rule that failed
    pub rule: RuleKind,
    /// Human-readable description of the failure
    pub detail: String,
    /// Drawing instructions marking the failure on the page
    pub ops: Vec<DrawOp>,
}

impl Violation {
    /// Create a violation.
    pub fn new(page: u32, rule: RuleKind, detail: impl Into<String>, ops: Vec<DrawOp>) -> Self {
        Self {
            page,
            rule,
            detail: detail.into(),
            ops,
        }
    }
}
