//! Broken cross-reference detection.

use crate::corpus::{display_path, Corpus};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects relative links whose target is not in the corpus.
pub struct BrokenLinkRule;

impl LintRule for BrokenLinkRule {
    fn id(&self) -> RuleId {
        RuleId::new("broken-link")
    }

    fn name(&self) -> &str {
        "Broken Cross-Reference"
    }

    fn description(&self) -> &str {
        "Detects relative links to documents or files that do not exist"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            for link in &doc.links {
                if corpus.contains(&link.resolved) {
                    continue;
                }
                findings.push(Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::line(&doc.path, link.line),
                    format!(
                        "broken cross-reference: '{}' (resolves to {})",
                        link.target,
                        display_path(&link.resolved)
                    ),
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::corpus;
    use std::path::PathBuf;

    #[test]
    fn detects_link_to_missing_directory() {
        let corpus = corpus(&[
            ("Chapter-1/index.md", "# One\n\nSee [next](../NoSuchDir/index.md).\n"),
            ("Chapter-1/quiz.md", "# Quiz\n"),
        ]);

        let findings = BrokenLinkRule.check(&corpus);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line(), Some(3));
        assert!(findings[0].message.contains("NoSuchDir/index.md"));
    }

    #[test]
    fn passes_link_to_existing_sibling() {
        let corpus = corpus(&[
            ("Chapter-1/index.md", "# One\n\nTry the [quiz](quiz.md#q1).\n"),
            ("Chapter-1/quiz.md", "# Quiz\n"),
        ]);

        assert!(BrokenLinkRule.check(&corpus).is_empty());
    }

    #[test]
    fn passes_link_to_asset() {
        let mut corpus = corpus(&[("index.md", "# A\n\n[sheet](files/sheet.pdf)\n")]);
        corpus.assets.insert(PathBuf::from("files/sheet.pdf"));

        assert!(BrokenLinkRule.check(&corpus).is_empty());
    }

    #[test]
    fn each_occurrence_is_reported() {
        let corpus = corpus(&[("index.md", "# A\n\n[x](gone.md)\n[x](gone.md)\n")]);

        assert_eq!(BrokenLinkRule.check(&corpus).len(), 2);
    }
}
