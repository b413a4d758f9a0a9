//! Near-duplicate document detection.
//!
//! Two documents whose prose is identical after normalization (see
//! [`Document::content_hash`](crate::corpus::Document)) are usually two
//! versions of the same lesson. Which one is canonical cannot be inferred,
//! so both stay and the later one is reported.

use std::collections::HashMap;

use crate::corpus::{Corpus, Document};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Reports documents whose normalized content matches an earlier document.
pub struct DuplicateDocumentRule;

impl LintRule for DuplicateDocumentRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-document")
    }

    fn name(&self) -> &str {
        "Duplicate Document"
    }

    fn description(&self) -> &str {
        "Reports documents whose prose duplicates another document"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut first_seen: HashMap<&str, &Document> = HashMap::new();
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            let Some(hash) = doc.content_hash.as_deref() else {
                continue;
            };
            match first_seen.get(hash) {
                Some(original) => findings.push(
                    Finding::new(
                        self.id(),
                        self.default_severity(),
                        Span::file(&doc.path),
                        format!("near-duplicate of {}", original.display_path()),
                    )
                    .with_related(Span::file(&original.path), "first copy"),
                ),
                None => {
                    first_seen.insert(hash, doc);
                }
            }
        }

        findings
    }
}
