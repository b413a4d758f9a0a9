//! Empty question detection.

use super::excerpt;
use crate::corpus::Corpus;
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Detects quiz questions that have no choices at all.
pub struct EmptyQuestionRule;

impl LintRule for EmptyQuestionRule {
    fn id(&self) -> RuleId {
        RuleId::new("empty-question")
    }

    fn name(&self) -> &str {
        "Empty Question"
    }

    fn description(&self) -> &str {
        "Detects quiz questions without any choices"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        corpus
            .documents
            .iter()
            .flat_map(|doc| {
                doc.quizzes
                    .iter()
                    .filter(|quiz| quiz.choices.is_empty())
                    .map(move |quiz| {
                        Finding::new(
                            self.id(),
                            self.default_severity(),
                            Span::lines(&doc.path, quiz.start_line, quiz.end_line),
                            format!("empty question: \"{}\" has no choices", excerpt(&quiz.prompt)),
                        )
                    })
            })
            .collect()
    }
}
