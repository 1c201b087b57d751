//! Region extraction: raw page content to normalized region records.

use crate::model::{PageContent, Region};

/// The three region sequences extracted from one page, in renderer order.
#[derive(Debug, Clone, Default)]
pub struct ExtractedRegions {
    /// One region per reported text block, text trimmed
    pub text: Vec<Region>,
    /// One region per image placement rectangle
    pub images: Vec<Region>,
    /// One region per vector drawing bounding rectangle
    pub vectors: Vec<Region>,
}

impl ExtractedRegions {
    /// Total number of regions across all three sequences.
    pub fn len(&self) -> usize {
        self.text.len() + self.images.len() + self.vectors.len()
    }

    /// Whether no regions were extracted at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize a page's raw content into region records.
///
/// Pure normalization: every reported block, placement, and drawing
/// becomes exactly one region, nothing is filtered or merged here. An
/// image placed more than once yields one region per placement.
pub fn extract(page: &PageContent) -> ExtractedRegions {
    ExtractedRegions {
        text: page
            .blocks
            .iter()
            .map(|b| Region::text(b.rect, &b.text))
            .collect(),
        images: page.images.iter().map(|r| Region::image(*r)).collect(),
        vectors: page.drawings.iter().map(|r| Region::vector(*r)).collect(),
    }
}
