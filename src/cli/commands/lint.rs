//! Lint command implementation.
//!
//! Loads the configuration and corpus, runs every enabled rule, and writes
//! the report. Exit code 1 means the run failed on findings.

use anyhow::Context;

use crate::cli::args::LintArgs;
use crate::config::load_config;
use crate::corpus::CorpusLoader;
use crate::error::Result;
use crate::lint::{
    Finding, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, RuleRegistry,
    SarifFormatter, Summary, Validator,
};
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    args: LintArgs,
    use_color: bool,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(args: LintArgs, use_color: bool) -> Self {
        Self { args, use_color }
    }

    /// Format findings using the requested formatter.
    fn format_output(
        &self,
        findings: &[Finding],
        registry: &RuleRegistry,
    ) -> std::io::Result<Vec<u8>> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Human => {
                HumanFormatter::new(self.use_color).format(findings, &mut output)?;
            }
            OutputFormat::Json => {
                JsonFormatter::new().format(findings, &mut output)?;
            }
            OutputFormat::Sarif => {
                SarifFormatter::new("lint-docs", env!("CARGO_PKG_VERSION"))
                    .with_registry(registry)
                    .format(findings, &mut output)?;
            }
        }

        Ok(output)
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.args.root, self.args.config.as_deref())?;
        let strict = self.args.strict || config.strict;

        let corpus = CorpusLoader::new(&self.args.root)
            .with_exclude(config.exclude.iter().cloned())
            .load()?;

        let validator = Validator::from_config(&config);
        let findings = validator.validate(&corpus);
        let summary = Summary::of(&findings);
        tracing::info!(
            "Checked {} document(s): {} error(s), {} warning(s), {} info",
            corpus.documents.len(),
            summary.errors,
            summary.warnings,
            summary.infos
        );

        let output = self
            .format_output(&findings, validator.registry())
            .context("failed to render lint report")?;
        ui.message(&String::from_utf8_lossy(&output));

        let failed = summary.is_failure(strict);
        if self.args.format == OutputFormat::Human {
            if summary.total == 0 {
                ui.success(&format!(
                    "No problems found in {} document(s)",
                    corpus.documents.len()
                ));
            } else if failed {
                ui.error(&summary.to_string());
            } else {
                ui.warning(&summary.to_string());
            }
        }

        if failed {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintDocsError;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn run(args: LintArgs) -> (Result<CommandResult>, MockUI) {
        let mut ui = MockUI::new();
        let result = LintCommand::new(args, false).execute(&mut ui);
        (result, ui)
    }

    #[test]
    fn clean_corpus_succeeds() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "intro.md", "# Intro\n\nWelcome.\n");

        let (result, ui) = run(LintArgs::new(temp.path()));

        assert_eq!(result.unwrap(), CommandResult::success());
        assert_eq!(ui.output(), "");
        assert!(ui.has_message("No problems found in 1 document(s)"));
    }

    #[test]
    fn quiz_error_fails() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "quiz.md",
            "# Quiz\n\n!!! quiz\n\n    1. Pick\n        - { data-correct } A\n        - { data-correct } B\n",
        );

        let (result, ui) = run(LintArgs::new(temp.path()));

        assert_eq!(result.unwrap(), CommandResult::failure(1));
        assert!(ui.output().starts_with("quiz.md:5: error: "));
        assert!(ui.errors()[0].contains("1 error(s)"));
    }

    #[test]
    fn warnings_fail_only_when_strict() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes.md", "Untitled notes.\n");

        let (result, ui) = run(LintArgs::new(temp.path()));
        assert!(result.unwrap().success);
        assert!(ui.warnings()[0].contains("1 warning(s)"));

        let mut args = LintArgs::new(temp.path());
        args.strict = true;
        let (result, _) = run(args);
        assert_eq!(result.unwrap(), CommandResult::failure(1));
    }

    #[test]
    fn config_strict_applies() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes.md", "Untitled notes.\n");
        write(temp.path(), ".lint-docs.yml", "strict: true\n");

        let (result, _) = run(LintArgs::new(temp.path()));

        assert_eq!(result.unwrap(), CommandResult::failure(1));
    }

    #[test]
    fn config_excludes_and_disables() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "site/built.md", "!!! quiz\n\n    1. Broken\n");
        write(temp.path(), "notes.md", "Untitled notes.\n");
        write(
            temp.path(),
            ".lint-docs.yml",
            "exclude: [site]\nrules:\n  missing-title: off\n",
        );

        let (result, ui) = run(LintArgs::new(temp.path()));

        assert!(result.unwrap().success);
        assert_eq!(ui.output(), "");
    }

    #[test]
    fn json_output_has_no_status_line() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes.md", "Untitled notes.\n");
        let mut args = LintArgs::new(temp.path());
        args.format = OutputFormat::Json;

        let (result, ui) = run(args);

        assert!(result.unwrap().success);
        let json: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(json["summary"]["warnings"], 1);
        assert_eq!(json["findings"][0]["rule_id"], "missing-title");
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn sarif_output_describes_rules() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes.md", "Untitled notes.\n");
        let mut args = LintArgs::new(temp.path());
        args.format = OutputFormat::Sarif;

        let (result, ui) = run(args);

        assert!(result.unwrap().success);
        let sarif: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        let rule = &sarif["runs"][0]["tool"]["driver"]["rules"][0];
        assert_eq!(rule["id"], "missing-title");
        assert!(rule["name"].is_string());
        assert_ne!(rule["shortDescription"]["text"], "missing-title");
    }

    #[test]
    fn missing_root_is_configuration_failure() {
        let temp = TempDir::new().unwrap();

        let (result, ui) = run(LintArgs::new(temp.path().join("nope")));

        let err = result.unwrap_err();
        assert!(matches!(err, LintDocsError::RootNotFound { .. }));
        assert!(err.is_configuration_failure());
        assert_eq!(ui.output(), "");
    }

    #[test]
    fn invalid_config_is_configuration_failure() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".lint-docs.yml", "stict: true\n");

        let (result, _) = run(LintArgs::new(temp.path()));

        assert!(matches!(
            result.unwrap_err(),
            LintDocsError::ConfigParseError { .. }
        ));
    }
}
