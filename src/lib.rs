//! # pagelint
//!
//! Layout-conformance auditing for paginated documents.
//!
//! pagelint checks the visual layout of a document against a formatting
//! rubric: page margins, paragraph first-line indentation, and image
//! horizontal alignment. It consumes the raw page content an external
//! renderer reports (words, text blocks, image placements, vector drawing
//! bounds) and produces a per-page violation report plus the drawing
//! instructions to visually mark each violation on an annotated copy.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagelint::{audit_file, AuditConfig};
//!
//! fn main() -> pagelint::Result<()> {
//!     // Page content previously dumped by the renderer
//!     let config = AuditConfig::new().with_margins(3.0, 3.0, 2.5, 2.5);
//!     let report = audit_file("document.pages.json", config)?;
//!
//!     print!("{}", report.to_text());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Raw page content flows through extraction ([`analyze::extract`]),
//! classification ([`analyze::RegionClassifier`]) and content-box
//! aggregation ([`analyze::analyze_page`]) into the rule evaluators
//! ([`rules`]). Pages are independent; the engine evaluates them in
//! parallel (Rayon) and sorts the results back into document order.

pub mod analyze;
pub mod annotate;
pub mod audit;
pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use annotate::{apply_annotations, AnnotationSink, RecordedOp, RecordingSink};
pub use audit::{Auditor, PageReport, Report};
pub use config::{AuditConfig, ImageAlignment};
pub use error::{Error, Result};
pub use geom::{cm_to_pt, Rect, CM_TO_PT};
pub use model::{
    Color, DocumentContent, DrawOp, Metadata, PageContent, Region, RegionKind, RegionLabel,
    RuleKind, TextItem, Violation,
};

use std::path::Path;

/// Audit a renderer content dump stored as a JSON file.
///
/// The only fatal failure is being unable to read or parse the input;
/// every per-page condition is handled by skipping.
pub fn audit_file<P: AsRef<Path>>(path: P, config: AuditConfig) -> Result<Report> {
    let doc = DocumentContent::from_json_file(path)?;
    audit_document(&doc, config)
}

/// Audit an in-memory document content dump.
pub fn audit_document(doc: &DocumentContent, config: AuditConfig) -> Result<Report> {
    Ok(Auditor::new(config)?.audit(doc))
}
