//! Multiple level-1 heading detection.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects documents with more than one level-1 heading.
pub struct MultipleH1Rule;

impl LintRule for MultipleH1Rule {
    fn id(&self) -> RuleId {
        RuleId::new("multiple-h1")
    }

    fn name(&self) -> &str {
        "Multiple H1"
    }

    fn description(&self) -> &str {
        "Detects documents with more than one level-1 heading"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            let h1s: Vec<_> = doc.sections.iter().filter(|s| s.level == 1).collect();
            if let [first, second, ..] = h1s.as_slice() {
                findings.push(
                    Finding::new(
                        self.id(),
                        self.default_severity(),
                        Span::line(&doc.path, second.line),
                        format!("document has {} level-1 headings (should be 1)", h1s.len()),
                    )
                    .with_related(Span::line(&doc.path, first.line), "first level-1 heading"),
                );
            }
        }

        findings
    }
}
