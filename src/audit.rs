//! The audit engine and its report.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyze::{analyze_page, RegionClassifier};
use crate::config::AuditConfig;
use crate::error::Result;
use crate::model::{DocumentContent, Metadata, PageContent, Violation};
use crate::rules::{standard_rules, Rule};

/// The layout audit engine.
///
/// Holds the immutable configuration, the compiled classifier, and the
/// rule set. Pages are independent units of work; the engine carries no
/// state across them.
pub struct Auditor {
    config: AuditConfig,
    classifier: RegionClassifier,
    rules: Vec<Box<dyn Rule>>,
}

impl Auditor {
    /// Create an auditor, validating the configuration once up front.
    pub fn new(config: AuditConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: RegionClassifier::new(),
            rules: standard_rules(),
        })
    }

    /// The configuration this auditor runs with.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Evaluate every rule against one page.
    ///
    /// Returns an empty list for a conforming page and for a page skipped
    /// as non-content.
    pub fn audit_page(&self, page: &PageContent) -> Vec<Violation> {
        let analysis = analyze_page(page, &self.classifier);
        if analysis.content_box.is_none() {
            log::debug!("page {}: skipped, no content box", page.number);
            return Vec::new();
        }
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(&analysis, &self.config))
            .collect()
    }

    /// Audit a whole document.
    ///
    /// Pages are mapped independently (in parallel when the configuration
    /// allows) and the results are sorted by page number, so the report is
    /// deterministic regardless of evaluation order.
    pub fn audit(&self, doc: &DocumentContent) -> Report {
        let mut pages: Vec<PageReport> = if self.config.parallel {
            doc.pages
                .par_iter()
                .filter_map(|page| self.page_report(page))
                .collect()
        } else {
            doc.pages
                .iter()
                .filter_map(|page| self.page_report(page))
                .collect()
        };
        pages.sort_by_key(|entry| entry.page);

        log::debug!(
            "audited {} pages, {} with violations",
            doc.page_count(),
            pages.len()
        );

        Report {
            metadata: doc.metadata.clone(),
            pages,
        }
    }

    fn page_report(&self, page: &PageContent) -> Option<PageReport> {
        let violations = self.audit_page(page);
        if violations.is_empty() {
            return None;
        }
        Some(PageReport {
            page: page.number,
            messages: violations.iter().map(|v| v.detail.clone()).collect(),
            violations,
        })
    }
}

/// All violations of one page, messages in rule order (margins,
/// indentation, image alignment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    /// Page number (1-indexed)
    pub page: u32,
    /// One message per failed rule
    pub messages: Vec<String>,
    /// The underlying violations with their draw instructions
    pub violations: Vec<Violation>,
}

/// The result of auditing a document: one entry per page with at least one
/// violation, ordered by page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Metadata echoed from the document content
    pub metadata: Metadata,
    /// Pages with violations, ascending page order
    pub pages: Vec<PageReport>,
}

impl Report {
    /// Whether no page violated any rule.
    pub fn is_clean(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of violations across all pages.
    pub fn violation_count(&self) -> usize {
        self.pages.iter().map(|p| p.violations.len()).sum()
    }

    /// Iterate over every violation in report order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.pages.iter().flat_map(|p| p.violations.iter())
    }

    /// Render the report as plain text, one line per failing page.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.metadata.title {
            out.push_str(&format!("Document: {title}\n"));
        }
        if self.is_clean() {
            out.push_str("All pages conform to the configured layout.\n");
            return out;
        }
        out.push_str("Layout issues on the following pages:\n");
        for page in &self.pages {
            out.push_str(&format!("Page {}: {}\n", page.page, page.messages.join(", ")));
        }
        out
    }
}
