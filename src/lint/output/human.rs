//! Human-readable output formatter.
//!
//! Prints one line per finding, `path:line: severity: message`, dropping
//! the `:line` part when the finding has no line. Severity labels are
//! colored when color is enabled.

use std::io::Write;

use console::Style;

use super::LintFormatter;
use crate::lint::{Finding, Severity};

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_label(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if !self.use_color {
            return label;
        }
        let style = match severity {
            Severity::Info => Style::new().cyan(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Error => Style::new().red().bold(),
        };
        style.force_styling(true).apply_to(label).to_string()
    }

    /// Render a single finding without a trailing newline.
    pub fn format_finding(&self, finding: &Finding) -> String {
        let location = match finding.line() {
            Some(line) => format!("{}:{}", finding.span.display_file(), line),
            None => finding.span.display_file(),
        };
        format!(
            "{}: {}: {}",
            location,
            self.severity_label(finding.severity),
            finding.message
        )
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        for finding in findings {
            writeln!(writer, "{}", self.format_finding(finding))?;
        }
        Ok(())
    }
}
