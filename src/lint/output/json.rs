//! JSON output formatter.
//!
//! Formats findings as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{LintFormatter, Summary};
use crate::lint::Finding;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    findings: Vec<JsonFinding>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonFinding {
    rule_id: String,
    severity: String,
    message: String,
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let json_findings: Vec<_> = findings
            .iter()
            .map(|f| JsonFinding {
                rule_id: f.rule_id.to_string(),
                severity: f.severity.to_string(),
                message: f.message.clone(),
                file: f.span.display_file(),
                line: f.span.start_line,
                end_line: f.span.end_line.filter(|end| Some(*end) != f.span.start_line),
                suggestion: f.suggestion.clone(),
            })
            .collect();

        let output = JsonOutput {
            findings: json_findings,
            summary: Summary::of(findings),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
