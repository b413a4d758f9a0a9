//! Lint findings.
//!
//! This module provides the [`Finding`] type for representing issues
//! found during corpus validation, with the location of each issue.

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A single observation produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the problem is.
    pub span: Span,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
    /// Additional related locations.
    pub related: Vec<RelatedInfo>,
}

/// Additional information related to a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Location of the related information.
    pub span: Span,
    /// Message explaining the relationship.
    pub message: String,
}

impl Finding {
    /// Create a new finding.
    pub fn new(rule_id: RuleId, severity: Severity, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span,
            suggestion: None,
            related: vec![],
        }
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            span,
            message: message.into(),
        });
        self
    }

    /// Line the finding starts on, if known.
    pub fn line(&self) -> Option<usize> {
        self.span.start_line
    }
}
