//! Relative cross-reference extraction and resolution.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use super::scan::ScannedLine;

/// Inline link or image: `[text](target "title")`.
///
/// Link text may hold one level of brackets, so a link wrapping an image
/// (`[![alt](a.png)](b.md)`) yields the outer target. A target in angle
/// brackets may contain spaces.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(!?)\[(?:[^\[\]]|\[[^\[\]]*\])*\]\(\s*(?:<([^<>]*)>|([^)\s]*))(?:\s+(?:"[^"]*"|'[^']*'))?\s*\)"#,
    )
    .expect("LINK_REGEX must compile")
});

/// Any URL scheme, such as `https:` or `mailto:`.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").expect("SCHEME_REGEX must compile")
});

static CODE_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`+[^`]*`+").expect("CODE_SPAN_REGEX must compile"));

/// A relative link found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target exactly as written.
    pub target: String,
    /// Target resolved against the document's directory, relative to the corpus root.
    pub resolved: PathBuf,
    /// 1-based line of the link.
    pub line: usize,
}

/// Extract every relative link from non-fence lines of a document.
///
/// Repeated links are kept; each occurrence is its own [`Link`].
pub fn extract_links(lines: &[ScannedLine<'_>], doc_path: &Path) -> Vec<Link> {
    let mut links = Vec::new();

    for line in lines.iter().filter(|l| !l.in_fence) {
        let text = CODE_SPAN_REGEX.replace_all(line.text, "");
        for caps in LINK_REGEX.captures_iter(&text) {
            if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
                continue;
            }
            let target = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            if let Some(resolved) = resolve_target(doc_path, target) {
                links.push(Link {
                    target: target.to_string(),
                    resolved,
                    line: line.number,
                });
            }
        }
    }

    links
}

/// Resolve `target` relative to the directory of `doc_path`.
///
/// Returns `None` for targets that cannot be checked statically: external
/// URLs, absolute paths, and same-page anchors.
pub fn resolve_target(doc_path: &Path, target: &str) -> Option<PathBuf> {
    if target.is_empty()
        || target.starts_with('#')
        || target.starts_with('/')
        || SCHEME_REGEX.is_match(target)
    {
        return None;
    }

    let path_part = target
        .split(['#', '?'])
        .next()
        .filter(|p| !p.is_empty())?;
    let decoded = percent_decode(path_part);

    let base = doc_path.parent().unwrap_or_else(|| Path::new(""));
    let mut resolved = normalize(&base.join(&decoded));
    if decoded.ends_with('/') {
        resolved.push("index.md");
    }
    Some(resolved)
}

/// Lexically normalize `.` and `..` components.
///
/// `..` that would climb above the start is kept so the result cannot
/// collide with a real corpus path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Decode `%XX` escapes; malformed escapes are kept verbatim.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            let hi = (bytes[i + 1] as char).to_digit(16).unwrap_or(0) as u8;
            let lo = (bytes[i + 2] as char).to_digit(16).unwrap_or(0) as u8;
            out.push(hi * 16 + lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::scan::scan;

    fn links_in(body: &str, doc: &str) -> Vec<Link> {
        let scanned = scan(body, 0);
        extract_links(&scanned.lines, Path::new(doc))
    }

    #[test]
    fn resolves_sibling_and_parent_links() {
        let body = "See [next](quiz.md) and [chapter](../Section-2/index.md).\n";
        let links = links_in(body, "Chapter-1/Section-1/index.md");

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].resolved, PathBuf::from("Chapter-1/Section-1/quiz.md"));
        assert_eq!(links[1].resolved, PathBuf::from("Chapter-1/Section-2/index.md"));
        assert_eq!(links[1].target, "../Section-2/index.md");
        assert_eq!(links[0].line, 1);
    }

    #[test]
    fn skips_external_and_anchor_links() {
        let body = "[a](https://example.com) [b](http://x.org) [c](#setup) [d](mailto:t@school.edu) [e](/abs.md)\n";
        assert!(links_in(body, "index.md").is_empty());
    }

    #[test]
    fn strips_fragment_and_query() {
        let links = links_in("[x](loops.md#while-loops) [y](loops.md?plain=1)\n", "ch/index.md");
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.resolved == PathBuf::from("ch/loops.md")));
    }

    #[test]
    fn directory_links_point_to_index() {
        let links = links_in("[intro](../intro/)\n", "ch2/index.md");
        assert_eq!(links[0].resolved, PathBuf::from("intro/index.md"));
    }

    #[test]
    fn images_and_code_are_ignored() {
        let body = "![diagram](img/flow.png)\n`[not](a-link.md)`\n```\n[also](not.md)\n```\n";
        assert!(links_in(body, "index.md").is_empty());
    }

    #[test]
    fn link_wrapping_an_image_uses_outer_target() {
        let links = links_in("[![diagram](img/flow.png)](flow.md)\n", "ch/index.md");

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "flow.md");
        assert_eq!(links[0].resolved, PathBuf::from("ch/flow.md"));
    }

    #[test]
    fn angle_bracket_target_may_contain_spaces() {
        let links = links_in("[types](<Data Types.md>) [plain](<loops.md> \"Loops\")\n", "ch/index.md");

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "Data Types.md");
        assert_eq!(links[0].resolved, PathBuf::from("ch/Data Types.md"));
        assert_eq!(links[1].resolved, PathBuf::from("ch/loops.md"));
    }

    #[test]
    fn repeated_links_are_not_deduplicated() {
        let body = "[a](x.md)\n[a again](x.md) [titled](x.md \"X\")\n";
        let links = links_in(body, "index.md");

        assert_eq!(links.len(), 3);
        assert_eq!(links[1].line, 2);
        assert_eq!(links[2].line, 2);
    }

    #[test]
    fn escaping_the_root_keeps_parent_components() {
        let resolved = resolve_target(Path::new("index.md"), "../../outside.md");
        assert_eq!(resolved, Some(PathBuf::from("../../outside.md")));
    }

    #[test]
    fn percent_escapes_are_decoded() {
        let resolved = resolve_target(Path::new("a/index.md"), "Data%20Types.md");
        assert_eq!(resolved, Some(PathBuf::from("a/Data Types.md")));
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
