//! Line classification for Markdown bodies.
//!
//! The scanner is the single place that knows about fenced code blocks.
//! Every other parser consumes [`ScannedLine`]s and skips lines that are
//! `in_fence`, so diagram sources and sample code are never parsed.

use regex::Regex;
use std::sync::LazyLock;

use super::document::Section;

/// ATX heading: up to three spaces of indent, 1-6 hashes, then text.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").expect("HEADING_REGEX must compile")
});

/// Optional closing sequence of an ATX heading (`## Title ##`).
static CLOSING_HASHES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[ \t]+)#+$").expect("CLOSING_HASHES_REGEX must compile")
});

/// One line of a document body with its position and fence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based line number in the original file.
    pub number: usize,
    /// Raw line text without the line terminator.
    pub text: &'a str,
    /// Whether the line is part of a fenced code block (delimiters included).
    pub in_fence: bool,
}

impl ScannedLine<'_> {
    /// Whether the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Width of the leading whitespace, counting a tab as four columns.
    pub fn indent(&self) -> usize {
        let mut width = 0;
        for c in self.text.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += 4,
                _ => break,
            }
        }
        width
    }
}

/// Result of scanning a body.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    pub lines: Vec<ScannedLine<'a>>,
    pub sections: Vec<Section>,
    /// Line number of a fence that is opened but never closed.
    pub unclosed_fence: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct OpenFence {
    marker: char,
    len: usize,
    line: usize,
}

/// Returns the fence character and run length if `text` starts a fence.
fn fence_run(text: &str) -> Option<(char, usize)> {
    let trimmed = text.trim_start();
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    (len >= 3).then_some((marker, len))
}

/// Parse an ATX heading line into `(level, text)`.
pub fn parse_heading(text: &str) -> Option<(u8, String)> {
    let caps = HEADING_REGEX.captures(text)?;
    let level = caps.get(1)?.as_str().len() as u8;
    let raw = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let text = CLOSING_HASHES_REGEX.replace(raw, "").trim().to_string();
    Some((level, text))
}

/// Scan `body`, whose first line is line `line_offset + 1` of the file.
pub fn scan(body: &str, line_offset: usize) -> Scan<'_> {
    let mut lines = Vec::new();
    let mut sections = Vec::new();
    let mut open: Option<OpenFence> = None;

    for (idx, text) in body.lines().enumerate() {
        let number = line_offset + idx + 1;

        if let Some(fence) = open {
            if let Some((marker, len)) = fence_run(text) {
                let rest = text.trim_start().trim_start_matches(marker);
                if marker == fence.marker && len >= fence.len && rest.trim().is_empty() {
                    open = None;
                }
            }
            lines.push(ScannedLine {
                number,
                text,
                in_fence: true,
            });
            continue;
        }

        if let Some((marker, len)) = fence_run(text) {
            open = Some(OpenFence {
                marker,
                len,
                line: number,
            });
            lines.push(ScannedLine {
                number,
                text,
                in_fence: true,
            });
            continue;
        }

        if let Some((level, heading)) = parse_heading(text) {
            sections.push(Section {
                level,
                text: heading,
                line: number,
            });
        }

        lines.push(ScannedLine {
            number,
            text,
            in_fence: false,
        });
    }

    Scan {
        lines,
        sections,
        unclosed_fence: open.map(|f| f.line),
    }
}
