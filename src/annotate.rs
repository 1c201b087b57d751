//! Annotation sink seam.
//!
//! The engine computes what to draw and where; applying the marks to the
//! output document is the renderer's job, reached through the
//! [`AnnotationSink`] trait. Application is always sequential in page
//! order, one writer against the single output handle, even when the
//! geometry evaluation ran in parallel.

use serde::{Deserialize, Serialize};

use crate::audit::Report;
use crate::geom::Rect;
use crate::model::{Color, DrawOp};

/// Receiver for the drawing instructions of a report.
///
/// Implemented by the external renderer over its output document handle.
pub trait AnnotationSink {
    /// Stroke a rectangle border on a page.
    fn draw_rect(&mut self, page: u32, rect: &Rect, color: Color, width: f32);

    /// Stroke a line segment on a page.
    fn draw_line(&mut self, page: u32, from: (f32, f32), to: (f32, f32), color: Color, width: f32);

    /// Insert a text label on a page.
    fn insert_text(&mut self, page: u32, at: (f32, f32), text: &str, size: f32, color: Color);
}

/// Feed every draw instruction of a report to a sink, in page order.
///
/// Only pages with at least one violation produce calls.
pub fn apply_annotations<S: AnnotationSink>(report: &Report, sink: &mut S) {
    for page_report in &report.pages {
        for violation in &page_report.violations {
            for op in &violation.ops {
                match op {
                    DrawOp::Rect { rect, color, width } => {
                        sink.draw_rect(page_report.page, rect, *color, *width)
                    }
                    DrawOp::Line {
                        from,
                        to,
                        color,
                        width,
                    } => sink.draw_line(page_report.page, *from, *to, *color, *width),
                    DrawOp::Text {
                        at,
                        text,
                        size,
                        color,
                    } => sink.insert_text(page_report.page, *at, text, *size, *color),
                }
            }
        }
    }
}

/// A draw instruction tagged with its page, as recorded by
/// [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedOp {
    /// Page number (1-indexed)
    pub page: u32,
    /// The instruction
    pub op: DrawOp,
}

/// A sink that records instructions instead of drawing them.
///
/// Used in tests, and by the CLI to export the instructions as JSON for an
/// external renderer to apply.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<RecordedOp>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded instructions, in application order.
    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    /// Consume the sink, returning the recorded instructions.
    pub fn into_ops(self) -> Vec<RecordedOp> {
        self.ops
    }
}

impl AnnotationSink for RecordingSink {
    fn draw_rect(&mut self, page: u32, rect: &Rect, color: Color, width: f32) {
        self.ops.push(RecordedOp {
            page,
            op: DrawOp::Rect {
                rect: *rect,
                color,
                width,
            },
        });
    }

    fn draw_line(&mut self, page: u32, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        self.ops.push(RecordedOp {
            page,
            op: DrawOp::Line {
                from,
                to,
                color,
                width,
            },
        });
    }

    fn insert_text(&mut self, page: u32, at: (f32, f32), text: &str, size: f32, color: Color) {
        self.ops.push(RecordedOp {
            page,
            op: DrawOp::Text {
                at,
                text: text.to_string(),
                size,
                color,
            },
        });
    }
}
