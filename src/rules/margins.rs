//! Page margin rule.

use crate::analyze::PageAnalysis;
use crate::config::AuditConfig;
use crate::model::{Color, DrawOp, RuleKind, Violation};

use super::{Rule, MARK_WIDTH};

/// Compares the measured margins around the content box against the
/// configured distances.
///
/// Left, top, and right are two-sided checks: content must start within
/// tolerance of the configured margin in either direction. The bottom is
/// one-sided: content may legitimately end well above the bottom margin (a
/// short last page), but must not run past it by more than the bottom
/// tolerance.
pub struct MarginsRule;

impl Rule for MarginsRule {
    fn evaluate(&self, page: &PageAnalysis, config: &AuditConfig) -> Option<Violation> {
        let content = page.content_box?;
        let tolerance = config.tolerance_pt();

        let actual_left = content.x0;
        let actual_top = content.y0;
        let actual_right = page.page_width - content.x1;
        let actual_bottom = page.page_height - content.y1;

        let mut failing = Vec::new();
        let mut ops = Vec::new();

        if (actual_left - config.left_margin_pt()).abs() > tolerance {
            failing.push(format!("Left ({actual_left:.2} pts)"));
            ops.push(edge_line(
                (content.x0, 0.0),
                (content.x0, page.page_height),
            ));
        }
        if (actual_top - config.top_margin_pt()).abs() > tolerance {
            failing.push(format!("Top ({actual_top:.2} pts)"));
            ops.push(edge_line((0.0, content.y0), (page.page_width, content.y0)));
        }
        if (actual_right - config.right_margin_pt()).abs() > tolerance {
            failing.push(format!("Right ({actual_right:.2} pts)"));
            ops.push(edge_line(
                (content.x1, 0.0),
                (content.x1, page.page_height),
            ));
        }
        if actual_bottom < config.bottom_margin_pt() - config.bottom_tolerance_pt() {
            failing.push(format!("Bottom ({actual_bottom:.2} pts)"));
            ops.push(edge_line((0.0, content.y1), (page.page_width, content.y1)));
        }

        if failing.is_empty() {
            return None;
        }

        // Border around the box the margins were measured from.
        ops.push(DrawOp::Rect {
            rect: content,
            color: Color::RED,
            width: MARK_WIDTH,
        });

        Some(Violation::new(
            page.page_number,
            RuleKind::Margins,
            failing.join(", "),
            ops,
        ))
    }
}

/// A full-page line along an offending edge of the content box.
fn edge_line(from: (f32, f32), to: (f32, f32)) -> DrawOp {
    DrawOp::Line {
        from,
        to,
        color: Color::RED,
        width: MARK_WIDTH,
    }
}
