//! Blank-line layout around headings and lists.
//!
//! Fenced lines are never checked. The first line of the body counts as
//! preceded by a blank line, so a heading right after front matter passes.

use regex::Regex;
use std::sync::LazyLock;

use super::scan::{parse_heading, ScannedLine};

/// `- item`, `* item`, `+ item`, `1. item` or `1) item`.
static LIST_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+\S").expect("LIST_ITEM_REGEX must compile")
});

/// What is missing around a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingKind {
    /// A heading directly below a non-blank line.
    HeadingNotPreceded,
    /// A heading directly above a non-blank line.
    HeadingNotFollowed,
    /// The first item of a list directly below a non-blank line.
    ListNotPreceded,
}

/// A blank-line problem at one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingIssue {
    pub kind: SpacingKind,
    /// 1-based line in the file.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
}

/// Whether `text` starts a list item.
pub fn is_list_item(text: &str) -> bool {
    LIST_ITEM_REGEX.is_match(text)
}

/// Find headings and lists that are not set off by blank lines.
pub fn check_spacing(lines: &[ScannedLine<'_>]) -> Vec<SpacingIssue> {
    let mut issues = Vec::new();
    let mut in_list = false;

    for (idx, line) in lines.iter().enumerate() {
        if line.is_blank() {
            in_list = false;
            continue;
        }
        if line.in_fence {
            in_list = false;
            continue;
        }

        let prev_blank = idx == 0 || lines[idx - 1].is_blank();
        let next_blank = lines.get(idx + 1).map_or(true, |l| l.is_blank());
        let issue = |kind| SpacingIssue {
            kind,
            line: line.number,
            text: line.text.trim().to_string(),
        };

        if parse_heading(line.text).is_some() {
            in_list = false;
            if !prev_blank {
                issues.push(issue(SpacingKind::HeadingNotPreceded));
            }
            if !next_blank {
                issues.push(issue(SpacingKind::HeadingNotFollowed));
            }
        } else if is_list_item(line.text) {
            if !prev_blank && !in_list {
                issues.push(issue(SpacingKind::ListNotPreceded));
            }
            in_list = true;
        }
    }

    issues
}
