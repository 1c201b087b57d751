//! Rule evaluators.
//!
//! Each rule consumes the derived page geometry plus the immutable
//! configuration and produces at most one violation per page, carrying the
//! draw instructions that mark it. A page without a content box is skipped
//! by every rule.

mod images;
mod indentation;
mod margins;

pub use images::ImageAlignmentRule;
pub use indentation::IndentationRule;
pub use margins::MarginsRule;

use crate::analyze::PageAnalysis;
use crate::config::AuditConfig;
use crate::model::Violation;

/// Line width used for every violation marking.
pub(crate) const MARK_WIDTH: f32 = 2.0;

/// One layout rule, evaluated independently per page.
pub trait Rule: Send + Sync {
    /// Evaluate the rule against one analyzed page.
    ///
    /// Returns `None` when the page passes (or is skipped).
    fn evaluate(&self, page: &PageAnalysis, config: &AuditConfig) -> Option<Violation>;
}

/// The standard rule set, in report order: margins, indentation, image
/// alignment.
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MarginsRule),
        Box::new(IndentationRule),
        Box::new(ImageAlignmentRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rule_order() {
        // Rule order drives per-page message order in the report.
        assert_eq!(standard_rules().len(), 3);
    }
}
