//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// lint-docs - Structural linter for Markdown course content.
#[derive(Debug, Parser)]
#[command(name = "lint-docs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub lint: LintArgs,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments for a lint run.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Root directory of the course content
    pub root: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Path to config file (overrides <ROOT>/.lint-docs.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl LintArgs {
    /// Arguments for linting `root` with every option at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            strict: false,
            format: OutputFormat::Human,
            config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_root_with_defaults() {
        let cli = Cli::try_parse_from(["lint-docs", "docs"]).unwrap();

        assert_eq!(cli.lint.root, PathBuf::from("docs"));
        assert!(!cli.lint.strict);
        assert_eq!(cli.lint.format, OutputFormat::Human);
        assert!(cli.lint.config.is_none());
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "lint-docs",
            "content",
            "--strict",
            "--format",
            "sarif",
            "--config",
            "ci.yml",
            "--no-color",
            "--debug",
        ])
        .unwrap();

        assert!(cli.lint.strict);
        assert_eq!(cli.lint.format, OutputFormat::Sarif);
        assert_eq!(cli.lint.config, Some(PathBuf::from("ci.yml")));
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn root_is_required() {
        assert!(Cli::try_parse_from(["lint-docs"]).is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lint-docs", "docs", "--format", "xml"]).is_err());
    }
}
