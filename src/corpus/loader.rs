//! Corpus discovery and loading.
//!
//! Walks the root directory, parses every `*.md` file into a [`Document`],
//! and records all other files as assets that links may point to.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::Document;
use super::{Corpus, ReadFailure};
use crate::error::{LintDocsError, Result};

/// Loads a [`Corpus`] from a directory tree.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root: PathBuf,
    exclude: Vec<PathBuf>,
}

#[derive(Default)]
struct WalkOutput {
    documents: Vec<Document>,
    assets: BTreeSet<PathBuf>,
    read_failures: Vec<ReadFailure>,
}

impl CorpusLoader {
    /// Create a loader for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
        }
    }

    /// Skip these root-relative paths (and everything beneath them).
    pub fn with_exclude(mut self, exclude: impl IntoIterator<Item = PathBuf>) -> Self {
        self.exclude.extend(exclude);
        self
    }

    /// Walk the root and parse every document.
    ///
    /// # Errors
    ///
    /// Fails only if the root is missing, is not a directory, or cannot be
    /// listed. Unreadable files inside it become [`ReadFailure`]s.
    pub fn load(&self) -> Result<Corpus> {
        if !self.root.exists() {
            return Err(LintDocsError::RootNotFound {
                path: self.root.clone(),
            });
        }
        if !self.root.is_dir() {
            return Err(LintDocsError::RootNotADirectory {
                path: self.root.clone(),
            });
        }

        let mut out = WalkOutput::default();
        let entries =
            sorted_entries(&self.root).map_err(|e| LintDocsError::RootUnreadable {
                path: self.root.clone(),
                message: e.to_string(),
            })?;
        self.walk_entries(entries, Path::new(""), &mut out);

        out.documents.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            documents = out.documents.len(),
            assets = out.assets.len(),
            read_failures = out.read_failures.len(),
            "Loaded corpus from {}",
            self.root.display()
        );

        Ok(Corpus {
            documents: out.documents,
            assets: out.assets,
            read_failures: out.read_failures,
        })
    }

    fn is_excluded(&self, rel: &Path) -> bool {
        self.exclude.iter().any(|ex| rel.starts_with(ex))
    }

    fn walk_entries(
        &self,
        entries: Vec<(PathBuf, fs::FileType)>,
        rel_dir: &Path,
        out: &mut WalkOutput,
    ) {
        for (path, file_type) in entries {
            let Some(name) = path.file_name() else {
                continue;
            };
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
            let rel = rel_dir.join(name);
            if self.is_excluded(&rel) {
                tracing::debug!("Excluded {}", rel.display());
                continue;
            }

            if file_type.is_dir() {
                match sorted_entries(&path) {
                    Ok(children) => self.walk_entries(children, &rel, out),
                    Err(e) => {
                        tracing::warn!("Cannot list {}: {}", path.display(), e);
                        out.read_failures.push(ReadFailure {
                            path: rel,
                            message: e.to_string(),
                        });
                    }
                }
            } else if is_markdown(&path) {
                match fs::read(&path) {
                    Ok(bytes) => {
                        let text = String::from_utf8_lossy(&bytes);
                        if matches!(text, std::borrow::Cow::Owned(_)) {
                            tracing::debug!("Replaced invalid UTF-8 in {}", rel.display());
                        }
                        out.documents.push(Document::parse(rel, &text));
                    }
                    Err(e) => {
                        tracing::warn!("Cannot read {}: {}", path.display(), e);
                        out.read_failures.push(ReadFailure {
                            path: rel,
                            message: e.to_string(),
                        });
                    }
                }
            } else if path.is_file() {
                out.assets.insert(rel);
            }
        }
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(PathBuf, fs::FileType)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push((entry.path(), entry.file_type()?));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
