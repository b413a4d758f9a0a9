//! Quiz answer key validation.
//!
//! This rule reports questions whose answer key is broken: no choice marked
//! correct, several marked correct, or a `data-correct` letter that points
//! past the last choice.

use super::excerpt;
use crate::corpus::{Corpus, QuizError};
use crate::lint::{Finding, LintRule, RuleId, Severity, Span};

/// Reports quiz questions without exactly one correct answer.
pub struct QuizAnswerRule;

impl LintRule for QuizAnswerRule {
    fn id(&self) -> RuleId {
        RuleId::new("quiz-answer")
    }

    fn name(&self) -> &str {
        "Quiz Answer Key"
    }

    fn description(&self) -> &str {
        "Requires exactly one correct choice per quiz question"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in &corpus.documents {
            for quiz in &doc.quizzes {
                let Some(error) = quiz.validation_error else {
                    continue;
                };
                let suggestion = match error {
                    QuizError::NoCorrectAnswer => "Mark the right choice with { data-correct }",
                    QuizError::MultipleCorrectAnswers => {
                        "Keep { data-correct } on a single choice"
                    }
                    QuizError::InvalidAnswerReference => {
                        "Use a letter between 'a' and the last choice"
                    }
                };
                findings.push(
                    Finding::new(
                        self.id(),
                        self.default_severity(),
                        Span::lines(&doc.path, quiz.start_line, quiz.end_line),
                        format!("question \"{}\": {}", excerpt(&quiz.prompt), error),
                    )
                    .with_suggestion(suggestion),
                );
            }
        }

        findings
    }
}
