//! Lint output formatters.
//!
//! This module provides formatters for outputting findings in different
//! formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::lint::{Finding, Severity};

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format findings to the given writer.
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()>;
}

/// Finding counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl Summary {
    /// Count the findings of each severity.
    pub fn of(findings: &[Finding]) -> Self {
        let count = |severity| findings.iter().filter(|f| f.severity == severity).count();
        Self {
            total: findings.len(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            infos: count(Severity::Info),
        }
    }

    /// Whether the run fails: any error, or any warning when strict.
    pub fn is_failure(&self, strict: bool) -> bool {
        self.errors > 0 || (strict && self.warnings > 0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} error(s), {} warning(s) and {} info",
            self.errors, self.warnings, self.infos
        )
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
