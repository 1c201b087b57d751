//! Region classification heuristics.
//!
//! Labels text and vector regions as header, footer, page number, or
//! trailing whitespace so they can be excluded from the content box. Text
//! near the page edge must also match a content pattern before it is
//! excluded; plain body text that happens to sit near an edge stays body
//! content. Vector regions carry no text to match, so for them position
//! alone decides.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::geom::{cm_to_pt, Rect};
use crate::model::{RegionKind, RegionLabel};

use super::ExtractedRegions;

/// Width of the "near the edge" zone at the top and bottom of a page, cm.
///
/// A fixed heuristic independent of the configured margins: it defines
/// proximity to the edge, not the margin itself.
const EDGE_ZONE_CM: f32 = 3.0;

/// Classifier for text and vector regions.
///
/// Image regions are never relabeled; images count as content wherever
/// they sit.
pub struct RegionClassifier {
    page_number: Regex,
    heading_prefix: Regex,
    long_date: Regex,
    title_year: Regex,
    copyright: Regex,
    url: Regex,
}

impl RegionClassifier {
    /// Compile the classification patterns.
    pub fn new() -> Self {
        Self {
            // One or more decimal digits and nothing else.
            page_number: Regex::new(r"^\d+$").unwrap(),
            // "Chapter 3", "Section 2.1", case-insensitive.
            heading_prefix: Regex::new(r"(?i)^(chapter|section)\s+\d+(\.\d+)*\b").unwrap(),
            // Long-form calendar dates: "March 4, 2024" or "4 March 2024".
            long_date: Regex::new(
                r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}\b|\b\d{1,2}\s+(january|february|march|april|may|june|july|august|september|october|november|december),?\s+\d{4}\b",
            )
            .unwrap(),
            // Short running title ending in a 4-digit year: "Annual Report 2024".
            title_year: Regex::new(r"(?i)^[a-z][a-z.,'&-]*(\s+[a-z.,'&-]+){0,3}\s+(19|20)\d{2}$")
                .unwrap(),
            // Copyright symbol or word plus a year.
            copyright: Regex::new(r"(?i)(©|\(c\))\s*\d{4}|copyright\s+\d{4}").unwrap(),
            url: Regex::new(r"(?i)(https?://|www\.)\S+").unwrap(),
        }
    }

    /// Label every text and vector region of a page in place.
    pub fn classify(&self, regions: &mut ExtractedRegions, page_height: f32) {
        for region in &mut regions.text {
            debug_assert_eq!(region.kind, RegionKind::Text);
            let label = self.label_text(region.trimmed_text(), &region.bounds, page_height);
            if label != RegionLabel::Body {
                log::debug!(
                    "excluding text region at y0={:.1} as {:?}: {:?}",
                    region.bounds.y0,
                    label,
                    region.trimmed_text()
                );
            }
            region.label = label;
        }
        for region in &mut regions.vectors {
            region.label = self.label_vector(&region.bounds, page_height);
        }
    }

    /// Classify one text region from its trimmed text and position.
    fn label_text(&self, text: &str, bounds: &Rect, page_height: f32) -> RegionLabel {
        let zone = cm_to_pt(EDGE_ZONE_CM);
        let top_in_bottom_zone = bounds.y0 > page_height - zone;
        let bottom_in_bottom_zone = bounds.y1 > page_height - zone;
        let bottom_in_top_zone = bounds.y1 < zone;

        // Fullwidth digits and compatibility forms classify like ASCII.
        let text: String = text.nfkc().collect();

        // A lone page number may be printed near either edge.
        if self.page_number.is_match(&text) && (top_in_bottom_zone || bottom_in_top_zone) {
            return RegionLabel::PageNumber;
        }

        // A whitespace-only block trailing past the content would pollute
        // the bottom margin measurement.
        if text.is_empty() && top_in_bottom_zone {
            return RegionLabel::TrailingWhitespace;
        }

        if bottom_in_top_zone && self.matches_header(&text) {
            return RegionLabel::Header;
        }

        if bottom_in_bottom_zone && self.matches_footer(&text) {
            return RegionLabel::Footer;
        }

        RegionLabel::Body
    }

    /// Classify one vector region from position alone.
    fn label_vector(&self, bounds: &Rect, page_height: f32) -> RegionLabel {
        let zone = cm_to_pt(EDGE_ZONE_CM);
        if bounds.y1 < zone {
            RegionLabel::Header
        } else if bounds.y1 > page_height - zone {
            RegionLabel::Footer
        } else {
            RegionLabel::Body
        }
    }

    fn matches_header(&self, text: &str) -> bool {
        self.heading_prefix.is_match(text)
            || self.long_date.is_match(text)
            || self.title_year.is_match(text)
    }

    fn matches_footer(&self, text: &str) -> bool {
        self.copyright.is_match(text) || self.url.is_match(text)
    }
}

impl Default for RegionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::extract;
    use crate::model::PageContent;

    const PAGE_H: f32 = 842.0; // A4 height, pts
    const PAGE_W: f32 = 595.0;

    fn classify_one(text: &str, rect: Rect) -> RegionLabel {
        let mut page = PageContent::new(1, PAGE_W, PAGE_H);
        page.add_block(rect, text);
        let mut regions = extract(&page);
        RegionClassifier::new().classify(&mut regions, PAGE_H);
        regions.text[0].label
    }

    fn classify_vector(rect: Rect) -> RegionLabel {
        let mut page = PageContent::new(1, PAGE_W, PAGE_H);
        page.add_drawing(rect);
        let mut regions = extract(&page);
        RegionClassifier::new().classify(&mut regions, PAGE_H);
        regions.vectors[0].label
    }

    #[test]
    fn test_page_number_bottom() {
        // 3 cm zone starts at 842 - 85.04 = 756.96
        let label = classify_one("12", Rect::new(290.0, 800.0, 305.0, 812.0));
        assert_eq!(label, RegionLabel::PageNumber);
    }

    #[test]
    fn test_page_number_top() {
        let label = classify_one("12", Rect::new(290.0, 30.0, 305.0, 42.0));
        assert_eq!(label, RegionLabel::PageNumber);
    }

    #[test]
    fn test_digits_mid_page_are_body() {
        let label = classify_one("12", Rect::new(290.0, 400.0, 305.0, 412.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_fullwidth_digits_classify_as_page_number() {
        let label = classify_one("１２", Rect::new(290.0, 800.0, 305.0, 812.0));
        assert_eq!(label, RegionLabel::PageNumber);
    }

    #[test]
    fn test_non_digit_near_bottom_not_page_number() {
        let label = classify_one("p. 12", Rect::new(290.0, 800.0, 330.0, 812.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_trailing_whitespace() {
        let label = classify_one("   \n", Rect::new(70.0, 790.0, 500.0, 820.0));
        assert_eq!(label, RegionLabel::TrailingWhitespace);
    }

    #[test]
    fn test_whitespace_mid_page_kept() {
        let label = classify_one("  ", Rect::new(70.0, 400.0, 500.0, 420.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_header_chapter_prefix() {
        let label = classify_one("Chapter 3", Rect::new(70.0, 30.0, 200.0, 45.0));
        assert_eq!(label, RegionLabel::Header);
    }

    #[test]
    fn test_header_section_with_subsection() {
        let label = classify_one("Section 2.1 Methods", Rect::new(70.0, 30.0, 250.0, 45.0));
        assert_eq!(label, RegionLabel::Header);
    }

    #[test]
    fn test_header_long_date() {
        let label = classify_one("March 4, 2024", Rect::new(400.0, 30.0, 520.0, 45.0));
        assert_eq!(label, RegionLabel::Header);
    }

    #[test]
    fn test_header_title_year() {
        let label = classify_one("Annual Report 2024", Rect::new(70.0, 30.0, 250.0, 45.0));
        assert_eq!(label, RegionLabel::Header);
    }

    #[test]
    fn test_header_pattern_requires_top_position() {
        // Same text mid-page is body content.
        let label = classify_one("Chapter 3", Rect::new(70.0, 400.0, 200.0, 415.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_plain_text_near_top_is_body() {
        let label = classify_one("This paragraph starts high.", Rect::new(70.0, 30.0, 400.0, 45.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_footer_copyright_symbol() {
        let label = classify_one("© 2024 Acme Corp", Rect::new(70.0, 800.0, 300.0, 815.0));
        assert_eq!(label, RegionLabel::Footer);
    }

    #[test]
    fn test_footer_copyright_word() {
        let label = classify_one("Copyright 2023", Rect::new(70.0, 800.0, 300.0, 815.0));
        assert_eq!(label, RegionLabel::Footer);
    }

    #[test]
    fn test_footer_url() {
        let label = classify_one("https://example.org/thesis", Rect::new(70.0, 800.0, 300.0, 815.0));
        assert_eq!(label, RegionLabel::Footer);
    }

    #[test]
    fn test_footer_pattern_requires_bottom_position() {
        let label = classify_one("www.example.org", Rect::new(70.0, 400.0, 300.0, 415.0));
        assert_eq!(label, RegionLabel::Body);
    }

    #[test]
    fn test_vector_positions() {
        // Graphical rule under a header line.
        assert_eq!(
            classify_vector(Rect::new(70.0, 48.0, 525.0, 50.0)),
            RegionLabel::Header
        );
        // Graphical rule above a footer.
        assert_eq!(
            classify_vector(Rect::new(70.0, 790.0, 525.0, 792.0)),
            RegionLabel::Footer
        );
        // Figure in the body.
        assert_eq!(
            classify_vector(Rect::new(70.0, 300.0, 525.0, 500.0)),
            RegionLabel::Body
        );
    }

    #[test]
    fn test_images_never_relabeled() {
        let mut page = PageContent::new(1, PAGE_W, PAGE_H);
        page.add_image(Rect::new(70.0, 10.0, 300.0, 40.0)); // image in the top zone
        let mut regions = extract(&page);
        RegionClassifier::new().classify(&mut regions, PAGE_H);
        assert_eq!(regions.images[0].label, RegionLabel::Body);
    }
}
