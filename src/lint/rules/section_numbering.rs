//! Section numbering consistency.
//!
//! Course folders encode numbering (`Chapter-04/Section-02-Strings/`), and
//! titles often repeat it (`4.2 Strings - Quiz`). When both are present
//! they should agree.

use crate::corpus::{Corpus, SectionNumber};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Reports titles whose `X.Y` number disagrees with the document's path.
pub struct SectionNumberingRule;

impl LintRule for SectionNumberingRule {
    fn id(&self) -> RuleId {
        RuleId::new("section-numbering")
    }

    fn name(&self) -> &str {
        "Section Numbering"
    }

    fn description(&self) -> &str {
        "Reports title numbers that disagree with Chapter-N/Section-M folders"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            let Some(from_path) = SectionNumber::from_path(&doc.path) else {
                continue;
            };
            let Some(title) = doc.title.as_deref() else {
                continue;
            };
            let Some(from_title) = SectionNumber::from_title(title) else {
                continue;
            };
            if from_path == from_title {
                continue;
            }

            let line = match (&doc.front_matter_title, doc.first_h1()) {
                (None, Some(h1)) => h1.line,
                _ => 1,
            };
            findings.push(
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::line(&doc.path, line),
                    format!(
                        "title numbers this section {} but its folder says {}",
                        from_title, from_path
                    ),
                )
                .with_suggestion(format!("Renumber the title to {}", from_path)),
            );
        }

        findings
    }
}
