//! Image horizontal alignment rule.

use crate::analyze::PageAnalysis;
use crate::config::{AuditConfig, ImageAlignment};
use crate::model::{Color, DrawOp, RuleKind, Violation};

use super::{Rule, MARK_WIDTH};

/// Font size of the label placed above an offending image.
const LABEL_SIZE: f32 = 10.0;

/// Vertical offset of the label above the image's top edge, pts.
const LABEL_OFFSET: f32 = 10.0;

/// Checks every image placement on a page against the declared alignment
/// mode.
pub struct ImageAlignmentRule;

impl Rule for ImageAlignmentRule {
    fn evaluate(&self, page: &PageAnalysis, config: &AuditConfig) -> Option<Violation> {
        page.content_box?;

        let tolerance = config.tolerance_pt();
        let mut ops = Vec::new();

        for rect in &page.image_positions {
            let (misaligned, label) = match config.image_alignment {
                ImageAlignment::Left => (
                    (rect.x0 - config.left_margin_pt()).abs() > tolerance,
                    "<-- Image Should be LEFT Aligned!",
                ),
                ImageAlignment::Right => (
                    (page.page_width - rect.x1 - config.right_margin_pt()).abs() > tolerance,
                    "Image Should be RIGHT Aligned! -->",
                ),
                ImageAlignment::Center => (
                    (rect.center_x() - page.page_width / 2.0).abs() > tolerance,
                    "Align Image to CENTER!",
                ),
            };

            if misaligned {
                ops.push(DrawOp::Rect {
                    rect: *rect,
                    color: Color::RED,
                    width: MARK_WIDTH,
                });
                ops.push(DrawOp::Text {
                    at: (rect.x0, rect.y0 - LABEL_OFFSET),
                    text: label.to_string(),
                    size: LABEL_SIZE,
                    color: Color::RED,
                });
            }
        }

        if ops.is_empty() {
            return None;
        }

        Some(Violation::new(
            page.page_number,
            RuleKind::ImageAlignment,
            format!("Images not {}-aligned.", config.image_alignment),
            ops,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{analyze_page, RegionClassifier};
    use crate::geom::Rect;
    use crate::model::PageContent;

    fn evaluate(page: &PageContent, config: &AuditConfig) -> Option<Violation> {
        let analysis = analyze_page(page, &RegionClassifier::new());
        ImageAlignmentRule.evaluate(&analysis, config)
    }

    fn page_with_image(rect: Rect) -> PageContent {
        let mut page = PageContent::new(1, 595.0, 842.0);
        page.add_text(
            Rect::new(70.9, 85.0, 524.0, 700.0),
            "Body text around the figure.",
        );
        page.add_image(rect);
        page
    }

    fn config(alignment: ImageAlignment) -> AuditConfig {
        AuditConfig::new()
            .with_margins(3.0, 3.0, 2.5, 2.5)
            .with_image_alignment(alignment)
    }

    #[test]
    fn test_left_aligned_image_passes() {
        let page = page_with_image(Rect::new(70.9, 200.0, 300.0, 350.0));
        assert!(evaluate(&page, &config(ImageAlignment::Left)).is_none());
    }

    #[test]
    fn test_left_mode_flags_offset_image() {
        let page = page_with_image(Rect::new(200.0, 200.0, 400.0, 350.0));

        let violation = evaluate(&page, &config(ImageAlignment::Left)).unwrap();
        assert_eq!(violation.rule, RuleKind::ImageAlignment);
        assert_eq!(violation.detail, "Images not left-aligned.");
        // Border rect plus label per offending image.
        assert_eq!(violation.ops.len(), 2);
        let DrawOp::Text { at, text, .. } = &violation.ops[1] else {
            panic!("expected a text label");
        };
        assert_eq!(*at, (200.0, 190.0));
        assert!(text.contains("LEFT"));
    }

    #[test]
    fn test_right_mode() {
        // x1 = 595 - 70.865 within tolerance of the right margin.
        let page = page_with_image(Rect::new(300.0, 200.0, 524.1, 350.0));
        assert!(evaluate(&page, &config(ImageAlignment::Right)).is_none());

        let page = page_with_image(Rect::new(100.0, 200.0, 300.0, 350.0));
        let violation = evaluate(&page, &config(ImageAlignment::Right)).unwrap();
        assert_eq!(violation.detail, "Images not right-aligned.");
    }

    #[test]
    fn test_center_mode_symmetric() {
        // Centered on 297.5 passes either way it is reflected.
        let centered = Rect::new(247.5, 200.0, 347.5, 350.0);
        let page = page_with_image(centered);
        assert!(evaluate(&page, &config(ImageAlignment::Center)).is_none());

        // Reflect an off-center image about the centerline: same verdict.
        let off = Rect::new(100.0, 200.0, 250.0, 350.0);
        let reflected = Rect::new(595.0 - 250.0, 200.0, 595.0 - 100.0, 350.0);
        let verdict_a = evaluate(&page_with_image(off), &config(ImageAlignment::Center));
        let verdict_b = evaluate(&page_with_image(reflected), &config(ImageAlignment::Center));
        assert_eq!(verdict_a.is_some(), verdict_b.is_some());
        assert!(verdict_a.is_some());
    }

    #[test]
    fn test_every_offending_image_marked() {
        let mut page = page_with_image(Rect::new(200.0, 200.0, 400.0, 300.0));
        page.add_image(Rect::new(250.0, 400.0, 450.0, 500.0));

        let violation = evaluate(&page, &config(ImageAlignment::Left)).unwrap();
        assert_eq!(violation.ops.len(), 4);
    }

    #[test]
    fn test_skipped_without_content_box() {
        // An image alone is not plausible content (under 5 chars of text).
        let mut page = PageContent::new(1, 595.0, 842.0);
        page.add_image(Rect::new(200.0, 200.0, 400.0, 350.0));
        assert!(evaluate(&page, &config(ImageAlignment::Left)).is_none());
    }
}
