//! Configuration schema types.
//!
//! These types map directly to the YAML structure of `.lint-docs.yml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::lint::Severity;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Paths relative to the corpus root that are not walked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathBuf>,

    /// Fail on warnings as well as errors.
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Per-rule overrides keyed by rule ID.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleSetting>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Override for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    /// Do not run the rule.
    Off,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl RuleSetting {
    /// The severity this setting assigns, or `None` when the rule is off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Info => Some(Severity::Info),
            Self::Warning => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}
