//! Running rules over a corpus.
//!
//! The [`Validator`] runs every enabled rule in registry order, applies
//! severity overrides, and returns findings sorted by `(path, line)`.
//! The sort is stable, so findings on the same line keep rule order.

use std::collections::BTreeMap;

use super::finding::Finding;
use super::registry::RuleRegistry;
use super::rule::{RuleId, Severity};
use crate::config::LintConfig;
use crate::corpus::Corpus;

/// Runs lint rules over a corpus.
pub struct Validator {
    registry: RuleRegistry,
    /// `None` disables the rule.
    overrides: BTreeMap<RuleId, Option<Severity>>,
}

impl Validator {
    /// Create a validator over the given rules with no overrides.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            overrides: BTreeMap::new(),
        }
    }

    /// Create a validator over the built-in rules, configured by `config`.
    ///
    /// Unknown rule IDs in the config are logged and ignored.
    pub fn from_config(config: &LintConfig) -> Self {
        let mut validator = Self::new(RuleRegistry::with_builtins());
        for (id, setting) in &config.rules {
            let id = RuleId::new(id.as_str());
            if validator.registry.get(&id).is_none() {
                tracing::warn!("Unknown rule '{}' in configuration, ignoring", id);
                continue;
            }
            validator.overrides.insert(id, setting.severity());
        }
        validator
    }

    /// Override a rule's severity.
    pub fn with_severity(mut self, id: RuleId, severity: Severity) -> Self {
        self.overrides.insert(id, Some(severity));
        self
    }

    /// Disable a rule.
    pub fn without_rule(mut self, id: RuleId) -> Self {
        self.overrides.insert(id, None);
        self
    }

    /// The rules this validator runs.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run all enabled rules and return sorted findings.
    pub fn validate(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut findings = Vec::new();

        for rule in self.registry.iter() {
            let id = rule.id();
            let severity = match self.overrides.get(&id) {
                Some(None) => {
                    tracing::debug!("Rule {} disabled", id);
                    continue;
                }
                Some(Some(severity)) => Some(*severity),
                None => None,
            };

            let mut produced = rule.check(corpus);
            tracing::debug!("Rule {} produced {} finding(s)", id, produced.len());
            if let Some(severity) = severity {
                for finding in &mut produced {
                    finding.severity = severity;
                }
            }
            findings.extend(produced);
        }

        findings.sort_by(|a, b| {
            (&a.span.file, a.span.start_line).cmp(&(&b.span.file, b.span.start_line))
        });
        findings
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }
}
