//! Configuration loading for lint-docs.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use lint_docs::config::{load_config, RuleSetting};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".lint-docs.yml"),
//!     "exclude: [site]\nrules:\n  duplicate-document: off\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.rules["duplicate-document"], RuleSetting::Off);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{LintConfig, RuleSetting};
