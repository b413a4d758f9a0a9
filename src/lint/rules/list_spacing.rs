//! Blank line before lists.

use super::excerpt;
use crate::corpus::{Corpus, SpacingKind};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects lists that start directly under a paragraph.
pub struct ListSpacingRule;

impl LintRule for ListSpacingRule {
    fn id(&self) -> RuleId {
        RuleId::new("list-spacing")
    }

    fn name(&self) -> &str {
        "List Spacing"
    }

    fn description(&self) -> &str {
        "Detects lists without a blank line before the first item"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        corpus
            .documents
            .iter()
            .flat_map(|doc| {
                doc.spacing
                    .iter()
                    .filter(|issue| issue.kind == SpacingKind::ListNotPreceded)
                    .map(move |issue| {
                        Finding::new(
                            self.id(),
                            self.default_severity(),
                            Span::line(&doc.path, issue.line),
                            format!(
                                "list item '{}' is not preceded by a blank line",
                                excerpt(&issue.text)
                            ),
                        )
                        .with_suggestion("Add a blank line before the list")
                    })
            })
            .collect()
    }
}
