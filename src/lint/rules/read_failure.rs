//! Unreadable file reporting.

use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Turns files the loader could not read into findings.
pub struct ReadFailureRule;

impl LintRule for ReadFailureRule {
    fn id(&self) -> RuleId {
        RuleId::new("read-failure")
    }

    fn name(&self) -> &str {
        "Read Failure"
    }

    fn description(&self) -> &str {
        "Reports files that could not be read"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        corpus
            .read_failures
            .iter()
            .map(|failure| {
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Span::file(&failure.path),
                    format!("cannot read file: {}", failure.message),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ReadFailure;
    use std::path::PathBuf;

    #[test]
    fn reports_each_failure() {
        let corpus = Corpus {
            read_failures: vec![ReadFailure {
                path: PathBuf::from("locked.md"),
                message: "Permission denied (os error 13)".into(),
            }],
            ..Default::default()
        };

        let findings = ReadFailureRule.check(&corpus);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].line().is_none());
        assert!(findings[0].message.contains("Permission denied"));
    }
}
