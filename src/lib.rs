//! lint-docs - Structural linter for Markdown course content.
//!
//! lint-docs walks a directory of Markdown lessons and reports broken
//! quiz answer keys, empty questions, skipped heading levels, broken
//! relative links, and other structural problems before they reach a
//! static site build.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.lint-docs.yml` loading
//! - [`corpus`] - Document parsing and directory walking
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, validation, and report formatting
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use lint_docs::corpus::CorpusLoader;
//! use lint_docs::lint::{Severity, Validator};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("intro.md"), "# Intro\n\nSee [next](next.md).\n").unwrap();
//!
//! let corpus = CorpusLoader::new(temp.path()).load().unwrap();
//! let findings = Validator::default().validate(&corpus);
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].severity, Severity::Warning);
//! assert!(findings[0].message.contains("next.md"));
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lint;
pub mod ui;

pub use error::{LintDocsError, Result};
