//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them. Rules
//! are kept in registration order, which is the order they run in and
//! the tie-break order for findings on the same line.

use super::rule::{LintRule, RuleId};
use super::rules::{
    BrokenLinkRule, DuplicateDocumentRule, EmptyQuestionRule, HeadingSkipRule,
    HeadingSpacingRule, ListSpacingRule, MissingTitleRule, MultipleH1Rule, QuizAnswerRule,
    ReadFailureRule, SectionNumberingRule, TitleMismatchRule, UnclosedFenceRule,
};

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ReadFailureRule));
        registry.register(Box::new(QuizAnswerRule));
        registry.register(Box::new(EmptyQuestionRule));
        registry.register(Box::new(HeadingSkipRule));
        registry.register(Box::new(BrokenLinkRule));
        registry.register(Box::new(MissingTitleRule));
        registry.register(Box::new(MultipleH1Rule));
        registry.register(Box::new(UnclosedFenceRule));
        registry.register(Box::new(TitleMismatchRule));
        registry.register(Box::new(SectionNumberingRule));
        registry.register(Box::new(DuplicateDocumentRule));
        registry.register(Box::new(HeadingSpacingRule));
        registry.register(Box::new(ListSpacingRule));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with the same ID replaces the earlier one in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
