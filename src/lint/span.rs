//! Source location spans.
//!
//! A span names a document by its corpus-relative path and, when known,
//! the lines a finding refers to.

use std::path::PathBuf;

use crate::corpus::display_path;

/// A location in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path relative to the corpus root.
    pub file: PathBuf,
    /// Starting line (1-indexed), if known.
    pub start_line: Option<usize>,
    /// Ending line (1-indexed), if known.
    pub end_line: Option<usize>,
}

impl Span {
    /// A span covering a whole file.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            start_line: None,
            end_line: None,
        }
    }

    /// Create a span covering a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            start_line: Some(line),
            end_line: Some(line),
        }
    }

    /// Create a span covering a range of lines.
    pub fn lines(file: impl Into<PathBuf>, start_line: usize, end_line: usize) -> Self {
        Self {
            file: file.into(),
            start_line: Some(start_line),
            end_line: Some(end_line),
        }
    }

    /// The path with `/` separators, as printed in reports.
    pub fn display_file(&self) -> String {
        display_path(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_line_constructor() {
        let span = Span::line("index.md", 10);

        assert_eq!(span.start_line, Some(10));
        assert_eq!(span.end_line, Some(10));
    }

    #[test]
    fn span_lines_constructor() {
        let span = Span::lines("quiz.md", 7, 11);

        assert_eq!(span.start_line, Some(7));
        assert_eq!(span.end_line, Some(11));
    }

    #[test]
    fn span_file_has_no_line() {
        let span = Span::file("locked.md");
        assert!(span.start_line.is_none());
    }

    #[test]
    fn span_file_path() {
        let span = Span::line(PathBuf::from("Chapter-1").join("index.md"), 1);

        assert_eq!(span.display_file(), "Chapter-1/index.md");
    }
}
