//! Chapter and section numbers derived from paths and titles.
//!
//! Course content encodes numbering in directory names such as
//! `Chapter-04-Data-Types/Section-02-Strings/`. Everything here is a pure
//! function of a string; there is no running counter across files.

use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static CHAPTER_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^chapter-0*(\d+)\b").expect("CHAPTER_DIR_REGEX must compile")
});

static SECTION_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^section-0*(\d+)\b").expect("SECTION_DIR_REGEX must compile")
});

/// `4.2 Strings`, `Section 4.2 Quiz: Strings`.
static TITLE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:section\s+)?0*(\d{1,3})\.0*(\d{1,2})\b").expect("TITLE_NUMBER_REGEX must compile")
});

/// A `chapter.section` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SectionNumber {
    pub chapter: u32,
    pub section: u32,
}

impl SectionNumber {
    pub fn new(chapter: u32, section: u32) -> Self {
        Self { chapter, section }
    }

    /// Read `Chapter-N` and `Section-M` directory components from a path.
    ///
    /// Both must be present. The innermost match of each wins.
    pub fn from_path(path: &Path) -> Option<Self> {
        let mut chapter = None;
        let mut section = None;

        for component in path.components() {
            let name = component.as_os_str().to_string_lossy();
            if let Some(n) = capture_number(&CHAPTER_DIR_REGEX, &name) {
                chapter = Some(n);
            } else if let Some(n) = capture_number(&SECTION_DIR_REGEX, &name) {
                section = Some(n);
            }
        }

        Some(Self::new(chapter?, section?))
    }

    /// Read a leading `X.Y` (optionally after `Section`) from a title.
    pub fn from_title(title: &str) -> Option<Self> {
        let caps = TITLE_NUMBER_REGEX.captures(title.trim())?;
        let chapter = caps.get(1)?.as_str().parse().ok()?;
        let section = caps.get(2)?.as_str().parse().ok()?;
        Some(Self::new(chapter, section))
    }
}

fn capture_number(regex: &Regex, text: &str) -> Option<u32> {
    regex.captures(text)?.get(1)?.as_str().parse().ok()
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.section)
    }
}
