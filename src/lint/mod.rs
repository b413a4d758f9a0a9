//! Corpus validation and linting.
//!
//! This module validates a parsed [`Corpus`](crate::corpus::Corpus)
//! through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of available rules ([`RuleRegistry`])
//! - **Validator** - Runs rules and sorts their output ([`Validator`])
//! - **Findings** - Issue reports with severity and location ([`Finding`])
//! - **Output** - Human, JSON, and SARIF formatters ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use lint_docs::corpus::{Corpus, Document};
//! use lint_docs::lint::{RuleId, Severity, Validator};
//!
//! let corpus = Corpus::from_documents([
//!     Document::parse("intro.md", "# Intro\n\n### Details\n"),
//! ]);
//!
//! let findings = Validator::default().validate(&corpus);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].rule_id, RuleId::new("heading-skip"));
//! assert_eq!(findings[0].severity, Severity::Warning);
//! ```

pub mod finding;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod span;
pub mod validator;

pub use finding::{Finding, RelatedInfo};
pub use output::{
    HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter, Summary,
};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    BrokenLinkRule, DuplicateDocumentRule, EmptyQuestionRule, HeadingSkipRule,
    HeadingSpacingRule, ListSpacingRule, MissingTitleRule, MultipleH1Rule, QuizAnswerRule,
    ReadFailureRule, SectionNumberingRule, TitleMismatchRule, UnclosedFenceRule,
};
pub use span::Span;
pub use validator::Validator;
