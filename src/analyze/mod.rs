//! Page analysis pipeline.
//!
//! Turns a page's raw renderer content into the geometry the rule
//! evaluators consume: normalized regions ([`extract`]), semantic labels
//! ([`classify::RegionClassifier`]), and the aggregated content box
//! ([`aggregate::analyze_page`]).

mod aggregate;
mod classify;
mod extract;

pub use aggregate::{analyze_page, PageAnalysis};
pub use classify::RegionClassifier;
pub use extract::{extract, ExtractedRegions};
