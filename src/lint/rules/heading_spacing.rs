//! Blank lines around headings.

use super::excerpt;
use crate::corpus::{Corpus, SpacingKind};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects headings not surrounded by blank lines.
pub struct HeadingSpacingRule;

impl LintRule for HeadingSpacingRule {
    fn id(&self) -> RuleId {
        RuleId::new("heading-spacing")
    }

    fn name(&self) -> &str {
        "Heading Spacing"
    }

    fn description(&self) -> &str {
        "Detects headings without a blank line above and below"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            for issue in &doc.spacing {
                let side = match issue.kind {
                    SpacingKind::HeadingNotPreceded => "preceded",
                    SpacingKind::HeadingNotFollowed => "followed",
                    SpacingKind::ListNotPreceded => continue,
                };
                findings.push(
                    Finding::new(
                        self.id(),
                        self.default_severity(),
                        Span::line(&doc.path, issue.line),
                        format!(
                            "heading '{}' not {} by a blank line",
                            excerpt(&issue.text),
                            side
                        ),
                    )
                    .with_suggestion("Add a blank line"),
                );
            }
        }

        findings
    }
}
