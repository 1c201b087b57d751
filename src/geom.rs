//! Page-space geometry primitives.
//!
//! All coordinates are in points (1 pt = 1/72 inch), the native length unit
//! of rendered documents, with the origin at the top-left corner of the page
//! and y increasing downward.

use serde::{Deserialize, Serialize};

/// Points per centimeter.
pub const CM_TO_PT: f32 = 28.346;

/// Convert a length in centimeters to points.
pub fn cm_to_pt(cm: f32) -> f32 {
    cm * CM_TO_PT
}

/// An axis-aligned rectangle in page space.
///
/// Invariant: `x0 <= x1` and `y0 <= y1` for well-formed rectangles. A
/// degenerate (zero-area) rectangle is valid and represents "no content";
/// [`Rect::EMPTY`] is the identity for [`Rect::union`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Rect = Rect {
        x0: 0.0,
        y0: 0.0,
        x1: 0.0,
        y1: 0.0,
    };

    /// Create a rectangle from its edges.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Whether the rectangle encloses no content (zero area or a
    /// non-positive dimension).
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Whether the rectangle is well-formed: all coordinates finite and
    /// edges not inverted. Renderers occasionally report inverted or NaN
    /// boxes; those are dropped from aggregation rather than unioned.
    pub fn is_valid(&self) -> bool {
        self.x0.is_finite()
            && self.y0.is_finite()
            && self.x1.is_finite()
            && self.y1.is_finite()
            && self.x0 <= self.x1
            && self.y0 <= self.y1
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// An empty rectangle acts as the identity, so a union can be folded
    /// starting from [`Rect::EMPTY`].
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.x0 <= other.x0
                && self.y0 <= other.y0
                && self.x1 >= other.x1
                && self.y1 >= other.y1)
    }

    /// Horizontal center of the rectangle.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }
}
