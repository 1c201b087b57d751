//! Paragraph first-line indentation rule.

use std::cmp::Ordering;

use crate::analyze::PageAnalysis;
use crate::config::AuditConfig;
use crate::geom::{cm_to_pt, Rect};
use crate::model::{Color, DrawOp, RuleKind, Violation};

use super::{Rule, MARK_WIDTH};

/// Two lines belong to the same cluster iff their y0 differ by at most
/// this many points.
const VERTICAL_TOLERANCE: f32 = 2.0;

/// Height of the marker box drawn over an offending indent, cm.
const MARK_HEIGHT_CM: f32 = 0.5;

/// Flags paragraph first lines indented past the expected indentation.
///
/// Only over-indentation is flagged: a first line flush with the margin or
/// under the expected indent is acceptable (non-indented paragraphs, list
/// items, headings). The measurement is word-granular; a block's reported
/// left edge may hide a hanging first-line indent.
pub struct IndentationRule;

impl Rule for IndentationRule {
    fn evaluate(&self, page: &PageAnalysis, config: &AuditConfig) -> Option<Violation> {
        page.content_box?;

        let body: Vec<&Rect> = page.body_text_regions().map(|r| &r.bounds).collect();
        if body.is_empty() {
            return None;
        }

        // The page's true left margin is where body text actually starts.
        let true_left = body
            .iter()
            .map(|b| b.x0)
            .fold(f32::INFINITY, f32::min);

        let indent_limit = config.indent_limit_pt();
        let mark_height = cm_to_pt(MARK_HEIGHT_CM);
        let mut ops = Vec::new();

        for y_pos in cluster_positions(&body) {
            // Leftmost word token on this first line.
            let first_word_x = page
                .words
                .iter()
                .filter(|w| (w.rect.y0 - y_pos).abs() < VERTICAL_TOLERANCE)
                .map(|w| w.rect.x0)
                .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            let Some(first_word_x) = first_word_x else {
                continue;
            };

            let indent = first_word_x - true_left;
            if indent > indent_limit {
                log::debug!(
                    "page {}: first line at y={y_pos:.1} indented {indent:.2} pts (limit {indent_limit:.2})",
                    page.page_number
                );
                ops.push(DrawOp::Rect {
                    rect: Rect::new(true_left, y_pos, first_word_x, y_pos + mark_height),
                    color: Color::RED,
                    width: MARK_WIDTH,
                });
            }
        }

        if ops.is_empty() {
            return None;
        }

        Some(Violation::new(
            page.page_number,
            RuleKind::Indentation,
            "Incorrect paragraph indentation detected.",
            ops,
        ))
    }
}

/// Distinct first-line y positions, ascending, with positions closer than
/// the vertical tolerance merged into one cluster.
fn cluster_positions(blocks: &[&Rect]) -> Vec<f32> {
    let mut positions: Vec<f32> = blocks.iter().map(|b| b.y0).collect();
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    positions.dedup_by(|a, b| (*a - *b).abs() < VERTICAL_TOLERANCE);
    positions
}
