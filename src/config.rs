//! Audit configuration.

use crate::error::{Error, Result};
use crate::geom::cm_to_pt;

/// Declared horizontal alignment for images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageAlignment {
    /// Flush with the left margin
    #[default]
    Left,
    /// Flush with the right margin
    Right,
    /// Centered on the page
    Center,
}

impl std::fmt::Display for ImageAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageAlignment::Left => write!(f, "left"),
            ImageAlignment::Right => write!(f, "right"),
            ImageAlignment::Center => write!(f, "center"),
        }
    }
}

/// Configuration for a layout audit.
///
/// Distances are entered in centimeters (the unit style guides use) and
/// converted to points where the geometry is compared. The configuration is
/// immutable once the audit starts; evaluators receive it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    /// Required top margin, cm
    pub top_margin_cm: f32,

    /// Required bottom margin, cm
    pub bottom_margin_cm: f32,

    /// Required left margin, cm
    pub left_margin_cm: f32,

    /// Required right margin, cm
    pub right_margin_cm: f32,

    /// Allowed deviation for left/top/right margins and image alignment, cm
    pub tolerance_cm: f32,

    /// Allowed deviation for the one-sided bottom margin check, cm
    pub bottom_tolerance_cm: f32,

    /// Expected paragraph first-line indentation, cm
    pub expected_indent_cm: f32,

    /// Allowed indentation deviation before over-indentation is flagged, cm
    pub indent_tolerance_cm: f32,

    /// Declared image alignment mode
    pub image_alignment: ImageAlignment,

    /// Whether pages may be evaluated in parallel
    pub parallel: bool,
}

impl AuditConfig {
    /// Create a configuration with default rubric values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the four margins (top, bottom, left, right) in cm.
    pub fn with_margins(mut self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.top_margin_cm = top;
        self.bottom_margin_cm = bottom;
        self.left_margin_cm = left;
        self.right_margin_cm = right;
        self
    }

    /// Set the uniform margin tolerance in cm.
    pub fn with_tolerance(mut self, cm: f32) -> Self {
        self.tolerance_cm = cm;
        self
    }

    /// Set the bottom margin tolerance in cm.
    pub fn with_bottom_tolerance(mut self, cm: f32) -> Self {
        self.bottom_tolerance_cm = cm;
        self
    }

    /// Set the expected first-line indentation in cm.
    pub fn with_expected_indent(mut self, cm: f32) -> Self {
        self.expected_indent_cm = cm;
        self
    }

    /// Set the indentation tolerance in cm.
    pub fn with_indent_tolerance(mut self, cm: f32) -> Self {
        self.indent_tolerance_cm = cm;
        self
    }

    /// Set the declared image alignment mode.
    pub fn with_image_alignment(mut self, alignment: ImageAlignment) -> Self {
        self.image_alignment = alignment;
        self
    }

    /// Disable the parallel page map.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that every distance is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("top margin", self.top_margin_cm),
            ("bottom margin", self.bottom_margin_cm),
            ("left margin", self.left_margin_cm),
            ("right margin", self.right_margin_cm),
            ("tolerance", self.tolerance_cm),
            ("bottom tolerance", self.bottom_tolerance_cm),
            ("expected indentation", self.expected_indent_cm),
            ("indentation tolerance", self.indent_tolerance_cm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative length, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Top margin in points.
    pub fn top_margin_pt(&self) -> f32 {
        cm_to_pt(self.top_margin_cm)
    }

    /// Bottom margin in points.
    pub fn bottom_margin_pt(&self) -> f32 {
        cm_to_pt(self.bottom_margin_cm)
    }

    /// Left margin in points.
    pub fn left_margin_pt(&self) -> f32 {
        cm_to_pt(self.left_margin_cm)
    }

    /// Right margin in points.
    pub fn right_margin_pt(&self) -> f32 {
        cm_to_pt(self.right_margin_cm)
    }

    /// Uniform tolerance in points.
    pub fn tolerance_pt(&self) -> f32 {
        cm_to_pt(self.tolerance_cm)
    }

    /// Bottom tolerance in points.
    pub fn bottom_tolerance_pt(&self) -> f32 {
        cm_to_pt(self.bottom_tolerance_cm)
    }

    /// Largest acceptable first-line indent in points.
    pub fn indent_limit_pt(&self) -> f32 {
        cm_to_pt(self.expected_indent_cm) + cm_to_pt(self.indent_tolerance_cm)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            top_margin_cm: 3.0,
            bottom_margin_cm: 3.0,
            left_margin_cm: 2.5,
            right_margin_cm: 2.5,
            tolerance_cm: 0.2,
            bottom_tolerance_cm: 0.2,
            expected_indent_cm: 0.5,
            indent_tolerance_cm: 0.1,
            image_alignment: ImageAlignment::Left,
            parallel: true,
        }
    }
}
