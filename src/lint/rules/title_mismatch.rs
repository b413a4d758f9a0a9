//! Front-matter title consistency.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Reports a front-matter title that differs from the document's first H1.
pub struct TitleMismatchRule;

impl LintRule for TitleMismatchRule {
    fn id(&self) -> RuleId {
        RuleId::new("title-mismatch")
    }

    fn name(&self) -> &str {
        "Title Mismatch"
    }

    fn description(&self) -> &str {
        "Reports front-matter titles that differ from the first level-1 heading"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            let (Some(meta), Some(h1)) = (&doc.front_matter_title, doc.first_h1()) else {
                continue;
            };
            if meta.trim() == h1.text.trim() {
                continue;
            }
            findings.push(
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::line(&doc.path, h1.line),
                    format!(
                        "front-matter title \"{}\" differs from heading \"{}\"",
                        meta, h1.text
                    ),
                )
                .with_suggestion("Keep the front-matter title in sync with the first heading"),
            );
        }

        findings
    }
}
