//! Content box aggregation.
//!
//! Unions the surviving regions of a page into the effective content
//! bounding box every rule measures against, and derives the per-page
//! analysis record consumed by the rule evaluators.

use crate::geom::{cm_to_pt, Rect};
use crate::model::{PageContent, Region, RegionKind, RegionLabel, TextItem};

use super::{extract, ExtractedRegions, RegionClassifier};

/// Minimum plausible content side length, cm. A union smaller in area than
/// this squared is treated as a non-content page (stray artifact, crop
/// mark).
const MIN_CONTENT_CM: f32 = 0.5;

/// Minimum combined trimmed-text length for a page to count as content.
const MIN_TEXT_CHARS: usize = 5;

/// Derived, read-only geometry of one page.
#[derive(Debug, Clone)]
pub struct PageAnalysis {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Page width, pts
    pub page_width: f32,
    /// Page height, pts
    pub page_height: f32,
    /// Effective content bounding box; `None` means "skip this page"
    pub content_box: Option<Rect>,
    /// Image placement rectangles, unfiltered by label
    pub image_positions: Vec<Rect>,
    /// Classified text regions, renderer order
    pub text_regions: Vec<Region>,
    /// Raw word tokens, for word-granularity measurements
    pub words: Vec<TextItem>,
}

impl PageAnalysis {
    /// Text regions that survived classification as body content.
    pub fn body_text_regions(&self) -> impl Iterator<Item = &Region> {
        self.text_regions
            .iter()
            .filter(|r| r.kind == RegionKind::Text && !r.is_excluded())
    }
}

/// Run extraction, classification, and aggregation for one page.
pub fn analyze_page(page: &PageContent, classifier: &RegionClassifier) -> PageAnalysis {
    let mut regions = extract(page);
    classifier.classify(&mut regions, page.height);

    let content_box = aggregate_content_box(&regions, page.number);
    let image_positions = regions
        .images
        .iter()
        .filter(|r| keep_bounds(r, page.number))
        .map(|r| r.bounds)
        .collect();

    PageAnalysis {
        page_number: page.number,
        page_width: page.width,
        page_height: page.height,
        content_box,
        image_positions,
        text_regions: regions.text,
        words: page.words.clone(),
    }
}

/// Union the surviving regions into the content box, or `None` for a page
/// with no plausible content.
///
/// Included: body-labeled text regions, every image region, and vector
/// regions not labeled header or footer. Emptiness is a two-signal check:
/// the union must reach a minimum area AND the included text regions must
/// carry a minimum number of characters.
fn aggregate_content_box(regions: &ExtractedRegions, page_number: u32) -> Option<Rect> {
    let mut bbox = Rect::EMPTY;
    let mut text_chars = 0usize;

    for region in &regions.text {
        if region.is_excluded() || !keep_bounds(region, page_number) {
            continue;
        }
        bbox = bbox.union(&region.bounds);
        text_chars += region.trimmed_text().chars().count();
    }

    for region in &regions.images {
        if keep_bounds(region, page_number) {
            bbox = bbox.union(&region.bounds);
        }
    }

    for region in &regions.vectors {
        let excluded = matches!(region.label, RegionLabel::Header | RegionLabel::Footer);
        if !excluded && keep_bounds(region, page_number) {
            bbox = bbox.union(&region.bounds);
        }
    }

    let min_area = cm_to_pt(MIN_CONTENT_CM) * cm_to_pt(MIN_CONTENT_CM);
    if bbox.is_empty() || bbox.area() < min_area || text_chars < MIN_TEXT_CHARS {
        log::debug!(
            "page {page_number}: no plausible content (area {:.1}, {text_chars} chars)",
            bbox.area()
        );
        return None;
    }

    Some(bbox)
}

/// Whether a region's bounds are usable. Malformed geometry from the
/// renderer is dropped here, never failing the page.
fn keep_bounds(region: &Region, page_number: u32) -> bool {
    if region.bounds.is_valid() {
        true
    } else {
        log::warn!(
            "page {page_number}: dropping {:?} region with malformed bounds {:?}",
            region.kind,
            region.bounds
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed(page: &PageContent) -> PageAnalysis {
        analyze_page(page, &RegionClassifier::new())
    }

    fn body_page() -> PageContent {
        let mut page = PageContent::a4(1);
        page.add_text(
            Rect::new(70.9, 85.0, 524.0, 700.0),
            "A full paragraph of body text.",
        );
        page
    }

    #[test]
    fn test_content_box_is_body_union() {
        let mut page = body_page();
        page.add_image(Rect::new(100.0, 710.0, 300.0, 750.0));

        let analysis = analyzed(&page);
        let content = analysis.content_box.unwrap();
        assert_eq!(content, Rect::new(70.9, 85.0, 524.0, 750.0));
        assert_eq!(analysis.image_positions.len(), 1);
    }

    #[test]
    fn test_excluded_regions_do_not_stretch_box() {
        let mut page = body_page();
        // Page number in the bottom zone and a header rule at the top.
        page.add_block(Rect::new(290.0, 800.0, 305.0, 812.0), "7");
        page.add_drawing(Rect::new(70.0, 48.0, 525.0, 50.0));

        let content = analyzed(&page).content_box.unwrap();
        assert_eq!(content, Rect::new(70.9, 85.0, 524.0, 700.0));
    }

    #[test]
    fn test_empty_page_has_no_content_box() {
        let analysis = analyzed(&PageContent::a4(1));
        assert!(analysis.content_box.is_none());
    }

    #[test]
    fn test_tiny_area_is_no_content() {
        let mut page = PageContent::a4(1);
        // 10x10 pt dot with enough characters, below the (0.5 cm)^2 area floor.
        page.add_text(Rect::new(100.0, 100.0, 110.0, 110.0), "artifact");
        assert!(analyzed(&page).content_box.is_none());
    }

    #[test]
    fn test_too_few_chars_is_no_content() {
        let mut page = PageContent::a4(1);
        // Large image but under 5 characters of text on the page.
        page.add_image(Rect::new(70.0, 85.0, 500.0, 700.0));
        page.add_text(Rect::new(70.0, 85.0, 90.0, 100.0), "ab");
        assert!(analyzed(&page).content_box.is_none());
    }

    #[test]
    fn test_malformed_region_dropped_not_fatal() {
        let mut page = body_page();
        page.add_image(Rect::new(f32::NAN, 0.0, 10.0, 10.0));
        page.add_drawing(Rect::new(400.0, 300.0, 100.0, 500.0)); // inverted

        let analysis = analyzed(&page);
        assert_eq!(analysis.content_box.unwrap(), Rect::new(70.9, 85.0, 524.0, 700.0));
        assert!(analysis.image_positions.is_empty());
    }

    #[test]
    fn test_image_positions_unfiltered_by_label() {
        let mut page = body_page();
        // Image in the top edge zone still counts as an image position.
        page.add_image(Rect::new(70.0, 10.0, 300.0, 40.0));

        let analysis = analyzed(&page);
        assert_eq!(analysis.image_positions.len(), 1);
    }

    #[test]
    fn test_body_text_regions_filtering() {
        let mut page = body_page();
        page.add_block(Rect::new(290.0, 800.0, 305.0, 812.0), "7");

        let analysis = analyzed(&page);
        assert_eq!(analysis.text_regions.len(), 2);
        assert_eq!(analysis.body_text_regions().count(), 1);
    }
}
