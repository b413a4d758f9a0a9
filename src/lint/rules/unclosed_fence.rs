//! Unclosed code fence detection.
//!
//! An unterminated fence swallows the rest of the document, hiding any
//! quizzes or links after it from both the site and this linter.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects fenced code blocks that are never closed.
pub struct UnclosedFenceRule;

impl LintRule for UnclosedFenceRule {
    fn id(&self) -> RuleId {
        RuleId::new("unclosed-fence")
    }

    fn name(&self) -> &str {
        "Unclosed Code Fence"
    }

    fn description(&self) -> &str {
        "Detects fenced code blocks without a closing fence"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        corpus
            .documents
            .iter()
            .filter_map(|doc| {
                let line = doc.unclosed_fence?;
                Some(Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::line(&doc.path, line),
                    "code fence is never closed",
                ))
            })
            .collect()
    }
}
