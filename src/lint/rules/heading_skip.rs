//! Heading level skip detection.
//!
//! A heading may go at most one level deeper than the heading before it:
//! `#` then `###` skips a level. Going back up by any amount is fine.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects headings that skip a nesting level.
pub struct HeadingSkipRule;

impl LintRule for HeadingSkipRule {
    fn id(&self) -> RuleId {
        RuleId::new("heading-skip")
    }

    fn name(&self) -> &str {
        "Heading Level Skip"
    }

    fn description(&self) -> &str {
        "Detects headings more than one level deeper than the previous heading"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            for pair in doc.sections.windows(2) {
                let (prev, cur) = (&pair[0], &pair[1]);
                if cur.level > prev.level + 1 {
                    findings.push(
                        Finding::new(
                            self.id(),
                            self.default_severity(),
                            Span::line(&doc.path, cur.line),
                            format!(
                                "heading level jumps from h{} to h{} (\"{}\")",
                                prev.level, cur.level, cur.text
                            ),
                        )
                        .with_suggestion(format!("Use a level-{} heading", prev.level + 1)),
                    );
                }
            }
        }

        findings
    }
}
