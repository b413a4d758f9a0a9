//! Course content model and parsing.
//!
//! This module turns a directory of Markdown lessons into an immutable
//! [`Corpus`] that lint rules inspect.
//!
//! # Overview
//!
//! - [`scan`] - Line classification and fenced-code tracking
//! - [`front_matter`] - `---` metadata blocks
//! - [`quiz`] - Quiz questions in admonition and heading style
//! - [`links`] - Relative cross-references
//! - [`numbering`] - Chapter/section numbers from paths and titles
//! - [`spacing`] - Blank lines around headings and lists
//! - [`document`] - The parsed [`Document`]
//! - [`loader`] - Directory walking ([`CorpusLoader`])
//!
//! # Example
//!
//! ```
//! use lint_docs::corpus::{Document, QuizError};
//!
//! let doc = Document::parse(
//!     "quiz.md",
//!     "# Quiz\n\n!!! quiz\n\n    1. Pick one\n        - { data-correct } A\n        - { data-correct } B\n",
//! );
//! assert_eq!(doc.title.as_deref(), Some("Quiz"));
//! assert_eq!(doc.quizzes[0].validation_error, Some(QuizError::MultipleCorrectAnswers));
//! ```

pub mod document;
pub mod front_matter;
pub mod links;
pub mod loader;
pub mod numbering;
pub mod quiz;
pub mod scan;
pub mod spacing;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use document::{display_path, Document, Section};
pub use front_matter::FrontMatter;
pub use links::Link;
pub use loader::CorpusLoader;
pub use numbering::SectionNumber;
pub use quiz::{Choice, QuizBlock, QuizBlocks, QuizError, QuizSyntax};
pub use spacing::{SpacingIssue, SpacingKind};

/// A file that was found but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// Path relative to the corpus root.
    pub path: PathBuf,
    pub message: String,
}

/// Every document under one root, fully parsed before validation.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents sorted by path.
    pub documents: Vec<Document>,
    /// Non-Markdown files, relative to the root.
    pub assets: BTreeSet<PathBuf>,
    pub read_failures: Vec<ReadFailure>,
}

impl Corpus {
    /// Build a corpus from already-parsed documents.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut documents: Vec<Document> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            documents,
            ..Default::default()
        }
    }

    /// Look up a document by its root-relative path.
    pub fn document(&self, path: &Path) -> Option<&Document> {
        self.documents
            .binary_search_by(|d| d.path.as_path().cmp(path))
            .ok()
            .map(|idx| &self.documents[idx])
    }

    /// Whether `path` names a document or an asset in the corpus.
    pub fn contains(&self, path: &Path) -> bool {
        self.document(path).is_some() || self.assets.contains(path)
    }
}
