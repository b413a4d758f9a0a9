//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning and editors.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::Serialize;

use super::LintFormatter;
use crate::lint::{Finding, RuleId, RuleRegistry, Severity, Span};

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Rule name and description, keyed by rule ID.
    rules: BTreeMap<RuleId, (String, String)>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    related_locations: Vec<SarifRelatedLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRelatedLocation {
    id: usize,
    physical_location: SarifPhysicalLocation,
    message: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            rules: BTreeMap::new(),
        }
    }

    /// Describe reported rules using the registry's names and descriptions.
    pub fn with_registry(mut self, registry: &RuleRegistry) -> Self {
        for rule in registry.iter() {
            self.rules.insert(
                rule.id(),
                (rule.name().to_string(), rule.description().to_string()),
            );
        }
        self
    }

    fn describe(&self, id: &RuleId) -> SarifRule {
        match self.rules.get(id) {
            Some((name, description)) => SarifRule {
                id: id.to_string(),
                name: Some(name.clone()),
                short_description: SarifMessage {
                    text: description.clone(),
                },
            },
            None => SarifRule {
                id: id.to_string(),
                name: None,
                short_description: SarifMessage {
                    text: id.to_string(),
                },
            },
        }
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn physical_location(span: &Span) -> SarifPhysicalLocation {
        SarifPhysicalLocation {
            artifact_location: SarifArtifactLocation {
                uri: span.display_file(),
            },
            region: span.start_line.map(|start_line| SarifRegion {
                start_line,
                end_line: span.end_line.filter(|end| *end != start_line),
            }),
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = findings.iter().map(|f| &f.rule_id).collect();

        let rules: Vec<_> = rule_ids.iter().map(|id| self.describe(id)).collect();

        let results: Vec<_> = findings
            .iter()
            .map(|f| SarifResult {
                rule_id: f.rule_id.to_string(),
                level: Self::severity_to_level(f.severity),
                message: SarifMessage {
                    text: f.message.clone(),
                },
                locations: vec![SarifLocation {
                    physical_location: Self::physical_location(&f.span),
                }],
                related_locations: f
                    .related
                    .iter()
                    .enumerate()
                    .map(|(id, related)| SarifRelatedLocation {
                        id,
                        physical_location: Self::physical_location(&related.span),
                        message: SarifMessage {
                            text: related.message.clone(),
                        },
                    })
                    .collect(),
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
