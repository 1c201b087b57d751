//! Data model for the layout audit.
//!
//! This module defines the hand-off types filled in by the external
//! renderer (raw page content), the intermediate region representation the
//! analysis pipeline works on, and the violation/draw-op types the rule
//! evaluators produce.

mod document;
mod page;
mod region;
mod violation;

pub use document::{DocumentContent, Metadata};
pub use page::{PageContent, TextItem};
pub use region::{Region, RegionKind, RegionLabel};
pub use violation::{Color, DrawOp, RuleKind, Violation};
