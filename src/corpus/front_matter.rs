//! Front matter extraction.
//!
//! A document may start with a `---` delimited block of `key: value`
//! metadata. Parsing never fails: anything that does not look like a
//! well-formed block is treated as ordinary body text.

use std::collections::BTreeMap;

/// Parsed front matter and the body that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Value of the `title` key, if present and non-empty.
    pub title: Option<String>,
    /// Text after the closing delimiter (or the whole text).
    pub body: &'a str,
    /// Number of file lines consumed before `body` starts.
    pub body_line_offset: usize,
}

impl<'a> FrontMatter<'a> {
    fn absent(text: &'a str) -> Self {
        Self {
            title: None,
            body: text,
            body_line_offset: 0,
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split `text` into front matter and body.
pub fn parse(text: &str) -> FrontMatter<'_> {
    let text_no_bom = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut offset = 0;
    let mut lines = text_no_bom.split_inclusive('\n');
    match lines.next() {
        Some(first) if is_delimiter(first.trim_end_matches(['\r', '\n'])) => {
            offset += first.len();
        }
        _ => return FrontMatter::absent(text_no_bom),
    }

    let block_start = offset;
    let mut block_end = None;
    let mut consumed_lines = 1;
    for line in lines {
        consumed_lines += 1;
        if is_delimiter(line.trim_end_matches(['\r', '\n'])) {
            block_end = Some(offset);
            offset += line.len();
            break;
        }
        offset += line.len();
    }

    let Some(block_end) = block_end else {
        return FrontMatter::absent(text_no_bom);
    };

    let block = &text_no_bom[block_start..block_end];
    let Some(fields) = parse_fields(block) else {
        tracing::debug!("Ignoring malformed front matter");
        return FrontMatter::absent(text_no_bom);
    };

    let title = fields
        .get("title")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    FrontMatter {
        title,
        body: &text_no_bom[offset..],
        body_line_offset: consumed_lines,
    }
}

/// Parse the block as a YAML mapping, falling back to plain `key: value` lines.
fn parse_fields(block: &str) -> Option<BTreeMap<String, String>> {
    if block.trim().is_empty() {
        return Some(BTreeMap::new());
    }

    match serde_yaml::from_str::<serde_yaml::Value>(block) {
        Ok(serde_yaml::Value::Mapping(map)) => {
            let mut fields = BTreeMap::new();
            for (key, value) in map {
                let Some(key) = scalar_to_string(&key) else {
                    continue;
                };
                if let Some(value) = scalar_to_string(&value) {
                    fields.insert(key, value);
                }
            }
            Some(fields)
        }
        // A scalar or a sequence is not front matter.
        Ok(_) => None,
        Err(_) => parse_key_value_lines(block),
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Lenient reading for titles YAML rejects, such as `title: Quiz: Loops`.
fn parse_key_value_lines(block: &str) -> Option<BTreeMap<String, String>> {
    let mut fields = BTreeMap::new();
    for line in block.lines().filter(|l| !l.trim().is_empty()) {
        let (key, value) = line.split_once(':')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        fields.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    Some(fields)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_and_body() {
        let text = "---\ntitle: Variables\nauthor: Staff\n---\n# Variables\n";
        let fm = parse(text);

        assert_eq!(fm.title.as_deref(), Some("Variables"));
        assert_eq!(fm.body, "# Variables\n");
        assert_eq!(fm.body_line_offset, 4);
    }

    #[test]
    fn quoted_title_is_unwrapped() {
        let fm = parse("---\ntitle: \"1.2 Loops - Quiz\"\n---\n");
        assert_eq!(fm.title.as_deref(), Some("1.2 Loops - Quiz"));
    }

    #[test]
    fn title_with_colon_falls_back_to_line_parsing() {
        let fm = parse("---\ntitle: Section 4.1 Quiz: Data Types\n---\nbody\n");
        assert_eq!(fm.title.as_deref(), Some("Section 4.1 Quiz: Data Types"));
        assert_eq!(fm.body, "body\n");
    }

    #[test]
    fn no_front_matter_returns_whole_text() {
        let text = "# Just a heading\n\n---\n\nrule above\n";
        let fm = parse(text);

        assert!(fm.title.is_none());
        assert_eq!(fm.body, text);
        assert_eq!(fm.body_line_offset, 0);
    }

    #[test]
    fn unterminated_block_is_absent() {
        let text = "---\ntitle: Never closed\n# Heading\n";
        let fm = parse(text);

        assert!(fm.title.is_none());
        assert_eq!(fm.body, text);
    }

    #[test]
    fn malformed_block_is_absent() {
        let text = "---\nthis is not metadata\nnor this\n---\nbody\n";
        let fm = parse(text);

        assert!(fm.title.is_none());
        assert_eq!(fm.body, text);
        assert_eq!(fm.body_line_offset, 0);
    }

    #[test]
    fn empty_block_has_no_title_but_strips_delimiters() {
        let fm = parse("---\n---\ncontent\n");
        assert!(fm.title.is_none());
        assert_eq!(fm.body, "content\n");
        assert_eq!(fm.body_line_offset, 2);
    }

    #[test]
    fn blank_title_is_none() {
        let fm = parse("---\ntitle: \"\"\n---\n");
        assert!(fm.title.is_none());
    }

    #[test]
    fn byte_order_mark_is_dropped_without_front_matter() {
        let fm = parse("\u{feff}# Variables\n");
        assert_eq!(fm.body, "# Variables\n");

        let fm = parse("\u{feff}---\ntitle: Loops\n---\nbody\n");
        assert_eq!(fm.title.as_deref(), Some("Loops"));
        assert_eq!(fm.body, "body\n");
    }

    #[test]
    fn crlf_line_endings() {
        let fm = parse("---\r\ntitle: Arrays\r\n---\r\nbody\r\n");
        assert_eq!(fm.title.as_deref(), Some("Arrays"));
        assert_eq!(fm.body, "body\r\n");
    }
}
