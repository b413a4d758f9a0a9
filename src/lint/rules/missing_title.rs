//! Missing title detection.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects documents with neither a front-matter title nor a level-1 heading.
pub struct MissingTitleRule;

impl LintRule for MissingTitleRule {
    fn id(&self) -> RuleId {
        RuleId::new("missing-title")
    }

    fn name(&self) -> &str {
        "Missing Title"
    }

    fn description(&self) -> &str {
        "Requires a front-matter title or a level-1 heading"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        corpus
            .documents
            .iter()
            .filter(|doc| doc.title.is_none())
            .map(|doc| {
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::line(&doc.path, 1),
                    "document has no title (no front-matter title and no level-1 heading)",
                )
                .with_suggestion("Add `title:` front matter or a `# Heading`")
            })
            .collect()
    }
}
