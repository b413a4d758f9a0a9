//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::LintConfig;
use crate::error::{LintDocsError, Result};

/// Name of the config file looked up in the corpus root.
pub const CONFIG_FILE_NAME: &str = ".lint-docs.yml";

/// Find the config file for a run.
///
/// An explicit path always wins, even if it does not exist (loading it
/// then fails). Otherwise `.lint-docs.yml` in the corpus root is used
/// when present.
pub fn discover_config(root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let path = root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the configuration for a run, falling back to defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    match discover_config(root, explicit) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(LintConfig::default()),
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintDocsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintDocsError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LintConfig`].
///
/// An empty file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LintDocsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
