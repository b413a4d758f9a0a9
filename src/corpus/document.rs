//! Parsed documents.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use super::front_matter;
use super::links::{extract_links, Link};
use super::quiz::{QuizBlock, QuizBlocks};
use super::scan::{parse_heading, scan, ScannedLine};
use super::spacing::{check_spacing, SpacingIssue};

/// A heading within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading level, 1-6.
    pub level: u8,
    pub text: String,
    /// 1-based line in the file.
    pub line: usize,
}

/// One parsed Markdown file. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the corpus root.
    pub path: PathBuf,
    /// Front-matter title, else the first level-1 heading.
    pub title: Option<String>,
    pub front_matter_title: Option<String>,
    pub sections: Vec<Section>,
    pub quizzes: Vec<QuizBlock>,
    pub links: Vec<Link>,
    /// Line of a code fence that is never closed.
    pub unclosed_fence: Option<usize>,
    /// Headings and lists missing a blank line around them.
    pub spacing: Vec<SpacingIssue>,
    /// SHA-256 of the normalized prose, `None` if there is no prose.
    pub content_hash: Option<String>,
}

impl Document {
    /// Parse `text` as the document at corpus-relative `path`.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let fm = front_matter::parse(text);
        let scanned = scan(fm.body, fm.body_line_offset);

        let quizzes: Vec<QuizBlock> = QuizBlocks::new(&scanned.lines).collect();
        let links = extract_links(&scanned.lines, &path);

        let first_h1 = scanned
            .sections
            .iter()
            .find(|s| s.level == 1 && !s.text.is_empty())
            .map(|s| s.text.clone());
        let title = fm.title.clone().or(first_h1);

        tracing::debug!(
            path = %path.display(),
            sections = scanned.sections.len(),
            quizzes = quizzes.len(),
            links = links.len(),
            "Parsed document"
        );

        Self {
            content_hash: content_hash(&scanned.lines),
            spacing: check_spacing(&scanned.lines),
            path,
            title,
            front_matter_title: fm.title,
            sections: scanned.sections,
            quizzes,
            links,
            unclosed_fence: scanned.unclosed_fence,
        }
    }

    /// The first level-1 heading, if any.
    pub fn first_h1(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.level == 1)
    }

    /// Path as displayed in findings, always `/`-separated.
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }
}

/// Render a corpus-relative path with `/` separators.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Hash the prose of a document so near-duplicates collide.
///
/// Fenced code (including diagram sources), blank lines, heading markers,
/// case, and whitespace runs are ignored.
fn content_hash(lines: &[ScannedLine<'_>]) -> Option<String> {
    let mut normalized = String::new();
    for line in lines.iter().filter(|l| !l.in_fence && !l.is_blank()) {
        let text = match parse_heading(line.text) {
            Some((_, heading)) => heading,
            None => line.text.to_string(),
        };
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            continue;
        }
        normalized.push_str(&text.to_lowercase());
        normalized.push('\n');
    }

    if normalized.is_empty() {
        return None;
    }
    Some(hex::encode(Sha256::digest(normalized.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_front_matter() {
        let doc = Document::parse("a.md", "---\ntitle: From Meta\n---\n# From Heading\n");
        assert_eq!(doc.title.as_deref(), Some("From Meta"));
        assert_eq!(doc.front_matter_title.as_deref(), Some("From Meta"));
        assert_eq!(doc.sections[0].line, 4);
    }

    #[test]
    fn title_falls_back_to_h1() {
        let doc = Document::parse("a.md", "Intro\n\n# Loops\n\n## While\n");
        assert_eq!(doc.title.as_deref(), Some("Loops"));
        assert!(doc.front_matter_title.is_none());
    }

    #[test]
    fn no_title_when_only_lower_headings() {
        let doc = Document::parse("a.md", "## Part\n\ntext\n");
        assert!(doc.title.is_none());
    }

    #[test]
    fn collects_quizzes_and_links() {
        let text = "# Quiz\n\nSee [notes](notes.md).\n\n!!! quiz\n\n    1. Q?\n        - { data-correct } A\n        - B\n";
        let doc = Document::parse("ch1/quiz.md", text);

        assert_eq!(doc.quizzes.len(), 1);
        assert_eq!(doc.links.len(), 1);
        assert_eq!(doc.links[0].resolved, PathBuf::from("ch1/notes.md"));
    }

    #[test]
    fn hash_ignores_diagram_syntax_and_whitespace() {
        let a = Document::parse(
            "a.md",
            "# Flow\n\nThe  loop runs.\n\n```mermaid\ngraph TD; A-->B\n```\n",
        );
        let b = Document::parse(
            "b.md",
            "#   flow\n\nThe loop runs.\n```kroki-plantuml\n@startuml\nA -> B\n@enduml\n```\n",
        );
        let c = Document::parse("c.md", "# Flow\n\nThe loop stops.\n");

        assert!(a.content_hash.is_some());
        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
    }

    #[test]
    fn empty_document_has_no_hash() {
        let doc = Document::parse("empty.md", "---\ntitle: Empty\n---\n\n```\ncode\n```\n");
        assert!(doc.content_hash.is_none());
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        let path: PathBuf = ["Chapter-1", "Section-2", "index.md"].iter().collect();
        assert_eq!(display_path(&path), "Chapter-1/Section-2/index.md");
    }
}
