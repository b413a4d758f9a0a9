//! Quiz block parsing.
//!
//! Two surface syntaxes appear in course content:
//!
//! ```text
//! !!! quiz "Section 2.1 Quiz"
//!
//!     1. Which keyword declares a constant?
//!         - var
//!         - { data-correct } const
//!         - let
//! ```
//!
//! and a heading per question:
//!
//! ```text
//! ## Question 1
//!
//! Which keyword declares a constant?
//!
//! - var
//! - const { data-correct }
//! ```
//!
//! Both are normalized into [`QuizBlock`] so validation never needs to know
//! which one a question came from. A correct answer can also be given by
//! letter with `{ data-correct="b" }`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::scan::{parse_heading, ScannedLine};

/// `!!! quiz "Title"`, also the collapsible `???` and `???+` forms.
static ADMONITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:!!!|\?\?\?\+?)\s+quiz\b"#)
        .expect("ADMONITION_REGEX must compile")
});

/// `## Question 3` (levels 2-6).
static QUESTION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^ {0,3}#{2,6}\s+question\s+\d+\b").expect("QUESTION_HEADING_REGEX must compile")
});

/// A numbered question inside an admonition.
static QUESTION_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+[.)]\s+(.*)$").expect("QUESTION_ITEM_REGEX must compile")
});

/// A choice: a bullet, or a legacy `a)` item.
static CHOICE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+]|[a-zA-Z]\))\s+(.*)$").expect("CHOICE_REGEX must compile")
});

static INLINE_MARK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*data-correct\s*\}").expect("INLINE_MARK_REGEX must compile")
});

static LETTER_MARK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\s*data-correct\s*=\s*["']?([^"'\s}]*)["']?\s*\}"#)
        .expect("LETTER_MARK_REGEX must compile")
});

/// Which surface syntax a quiz question was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSyntax {
    Admonition,
    HeadingStyle,
}

/// Structural problem with a question's answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    NoCorrectAnswer,
    MultipleCorrectAnswers,
    InvalidAnswerReference,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoCorrectAnswer => write!(f, "no correct answer marked"),
            QuizError::MultipleCorrectAnswers => write!(f, "more than one correct answer marked"),
            QuizError::InvalidAnswerReference => {
                write!(f, "data-correct refers to a choice that does not exist")
            }
        }
    }
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub is_correct: bool,
}

/// One quiz question with its choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBlock {
    pub prompt: String,
    pub choices: Vec<Choice>,
    /// First line of the question (1-based, file coordinates).
    pub start_line: usize,
    /// Last non-blank line belonging to the question.
    pub end_line: usize,
    pub syntax: QuizSyntax,
    pub validation_error: Option<QuizError>,
    /// Letter references that name no choice, as written.
    pub invalid_references: Vec<String>,
}

impl QuizBlock {
    /// Number of choices marked correct.
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_correct).count()
    }

    /// Render the question in canonical admonition form.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("!!! quiz \"Quiz\"\n\n");
        out.push_str(&format!("    1. {}\n", self.prompt));
        for choice in &self.choices {
            if choice.is_correct {
                out.push_str(&format!("        - {} {{ data-correct }}\n", choice.text));
            } else {
                out.push_str(&format!("        - {}\n", choice.text));
            }
        }
        for letter in &self.invalid_references {
            out.push_str(&format!("        {{ data-correct=\"{}\" }}\n", letter));
        }
        out
    }
}

/// Accumulates one question while its lines are consumed.
struct QuestionBuilder {
    prompt: Vec<String>,
    choices: Vec<Choice>,
    letter_refs: Vec<String>,
    /// Indent of the last choice's marker.
    choice_indent: usize,
    start_line: usize,
    end_line: usize,
    syntax: QuizSyntax,
}

impl QuestionBuilder {
    fn new(start_line: usize, syntax: QuizSyntax) -> Self {
        Self {
            prompt: Vec::new(),
            choices: Vec::new(),
            letter_refs: Vec::new(),
            choice_indent: 0,
            start_line,
            end_line: start_line,
            syntax,
        }
    }

    /// Remove answer markers from `text`, recording letter references.
    fn strip_markers(&mut self, text: &str) -> (String, bool) {
        for caps in LETTER_MARK_REGEX.captures_iter(text) {
            self.letter_refs
                .push(caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string());
        }
        let text = LETTER_MARK_REGEX.replace_all(text, "");
        let marked = INLINE_MARK_REGEX.is_match(&text);
        let text = INLINE_MARK_REGEX.replace_all(&text, "");
        (text.split_whitespace().collect::<Vec<_>>().join(" "), marked)
    }

    fn push_prompt(&mut self, text: &str) {
        let (text, _) = self.strip_markers(text);
        if !text.is_empty() {
            self.prompt.push(text);
        }
    }

    /// Feed one non-blank body line of the question.
    fn push_line(&mut self, line: &ScannedLine<'_>) {
        self.end_line = line.number;
        if let Some(caps) = CHOICE_REGEX.captures(line.text) {
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let (text, is_correct) = self.strip_markers(raw);
            self.choices.push(Choice { text, is_correct });
            self.choice_indent = line.indent();
        } else if self.choices.is_empty() {
            self.push_prompt(line.text);
        } else if line.indent() > self.choice_indent {
            self.continue_choice(line.text);
        } else if LETTER_MARK_REGEX.is_match(line.text) {
            self.strip_markers(line.text);
        }
    }

    /// Append a wrapped line to the last choice.
    fn continue_choice(&mut self, text: &str) {
        let (text, marked) = self.strip_markers(text);
        let Some(choice) = self.choices.last_mut() else {
            return;
        };
        choice.is_correct |= marked;
        if !text.is_empty() {
            if !choice.text.is_empty() {
                choice.text.push(' ');
            }
            choice.text.push_str(&text);
        }
    }

    fn finish(self) -> QuizBlock {
        let mut choices = self.choices;
        let mut invalid_references = Vec::new();

        for letter in self.letter_refs {
            match letter_index(&letter) {
                Some(idx) if idx < choices.len() => choices[idx].is_correct = true,
                _ => invalid_references.push(letter),
            }
        }

        let correct = choices.iter().filter(|c| c.is_correct).count();
        let validation_error = if !invalid_references.is_empty() {
            Some(QuizError::InvalidAnswerReference)
        } else if correct == 0 {
            Some(QuizError::NoCorrectAnswer)
        } else if correct > 1 {
            Some(QuizError::MultipleCorrectAnswers)
        } else {
            None
        };

        QuizBlock {
            prompt: self.prompt.join(" "),
            choices,
            start_line: self.start_line,
            end_line: self.end_line,
            syntax: self.syntax,
            validation_error,
            invalid_references,
        }
    }
}

/// Map `a`..`z` to a 0-based choice index.
fn letter_index(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    let c = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() || !c.is_ascii_lowercase() {
        return None;
    }
    Some((c as u8 - b'a') as usize)
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    InAdmonition { indent: usize },
}

/// Lazy, single-pass iterator over the quiz questions in a body.
pub struct QuizBlocks<'s, 'a> {
    lines: &'s [ScannedLine<'a>],
    pos: usize,
    state: State,
}

impl<'s, 'a> QuizBlocks<'s, 'a> {
    pub fn new(lines: &'s [ScannedLine<'a>]) -> Self {
        Self {
            lines,
            pos: 0,
            state: State::Outside,
        }
    }

    fn admonition_question(&mut self, block_indent: usize) -> QuizBlock {
        let first = self.lines[self.pos];
        let question_indent = first.indent();
        let mut builder = QuestionBuilder::new(first.number, QuizSyntax::Admonition);
        if let Some(caps) = QUESTION_ITEM_REGEX.captures(first.text) {
            builder.push_prompt(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
        }
        self.pos += 1;

        while let Some(line) = self.lines.get(self.pos) {
            if line.is_blank() || line.in_fence {
                self.pos += 1;
                continue;
            }
            if line.indent() <= block_indent {
                break;
            }
            if line.indent() <= question_indent && QUESTION_ITEM_REGEX.is_match(line.text) {
                break;
            }
            builder.push_line(line);
            self.pos += 1;
        }

        builder.finish()
    }

    fn heading_question(&mut self) -> QuizBlock {
        let first = self.lines[self.pos];
        let mut builder = QuestionBuilder::new(first.number, QuizSyntax::HeadingStyle);
        self.pos += 1;

        while let Some(line) = self.lines.get(self.pos) {
            if line.is_blank() || line.in_fence {
                self.pos += 1;
                continue;
            }
            if parse_heading(line.text).is_some() {
                break;
            }
            builder.push_line(line);
            self.pos += 1;
        }

        builder.finish()
    }
}

impl Iterator for QuizBlocks<'_, '_> {
    type Item = QuizBlock;

    fn next(&mut self) -> Option<QuizBlock> {
        while let Some(line) = self.lines.get(self.pos).copied() {
            match self.state {
                State::Outside => {
                    if line.in_fence {
                        self.pos += 1;
                    } else if ADMONITION_REGEX.is_match(line.text) {
                        self.state = State::InAdmonition {
                            indent: line.indent(),
                        };
                        self.pos += 1;
                    } else if QUESTION_HEADING_REGEX.is_match(line.text) {
                        return Some(self.heading_question());
                    } else {
                        self.pos += 1;
                    }
                }
                State::InAdmonition { indent } => {
                    if !line.is_blank() && !line.in_fence && line.indent() <= indent {
                        self.state = State::Outside;
                    } else if !line.in_fence && QUESTION_ITEM_REGEX.is_match(line.text) {
                        return Some(self.admonition_question(indent));
                    } else {
                        self.pos += 1;
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::scan::scan;

    fn parse_all(body: &str) -> Vec<QuizBlock> {
        let scanned = scan(body, 0);
        QuizBlocks::new(&scanned.lines).collect()
    }

    const ADMONITION: &str = r#"# 2.1 Variables - Quiz

!!! quiz "Section 2.1 Quiz: Variables"

    Test your understanding of key concepts from this section.

    1. Which keyword declares a constant?
        - var
        - { data-correct } const
        - let

    2. What is the type of 3.5?
        - int
        - float { data-correct }
        - str
"#;

    #[test]
    fn parses_admonition_questions() {
        let blocks = parse_all(ADMONITION);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].prompt, "Which keyword declares a constant?");
        assert_eq!(blocks[0].choices.len(), 3);
        assert!(blocks[0].choices[1].is_correct);
        assert_eq!(blocks[0].choices[1].text, "const");
        assert_eq!(blocks[0].start_line, 7);
        assert_eq!(blocks[0].end_line, 10);
        assert_eq!(blocks[0].syntax, QuizSyntax::Admonition);
        assert!(blocks[0].validation_error.is_none());

        assert_eq!(blocks[1].choices[1].text, "float");
        assert!(blocks[1].choices[1].is_correct);
        assert!(blocks[1].validation_error.is_none());
    }

    #[test]
    fn admonition_ends_at_dedent() {
        let body = "!!! quiz\n\n    1. Q?\n        - { data-correct } A\n\nAfter the quiz.\n\n1. Not a question\n    - nor a choice\n";
        let blocks = parse_all(body);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].choices.len(), 1);
    }

    #[test]
    fn collapsible_admonition_is_recognized() {
        let body = "???+ quiz \"Check\"\n\n    1. Q?\n        - { data-correct } A\n        - B\n";
        assert_eq!(parse_all(body).len(), 1);

        let other = "!!! note \"Not a quiz\"\n\n    1. Q?\n        - A\n";
        assert!(parse_all(other).is_empty());
    }

    #[test]
    fn multiple_marks_yield_error_but_keep_data() {
        let body = "!!! quiz\n\n    1. Pick one\n        - { data-correct } A\n        - { data-correct } B\n        - C\n";
        let blocks = parse_all(body);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].choices.len(), 3);
        assert_eq!(
            blocks[0].validation_error,
            Some(QuizError::MultipleCorrectAnswers)
        );
    }

    #[test]
    fn no_marks_yield_error() {
        let body = "!!! quiz\n\n    1. Pick one\n        - A\n        - B\n";
        let blocks = parse_all(body);
        assert_eq!(blocks[0].validation_error, Some(QuizError::NoCorrectAnswer));
    }

    #[test]
    fn question_without_choices() {
        let body = "!!! quiz\n\n    1. Explain recursion in your own words.\n\n    2. Pick\n        - { data-correct } A\n";
        let blocks = parse_all(body);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].choices.is_empty());
        assert_eq!(blocks[0].validation_error, Some(QuizError::NoCorrectAnswer));
        assert!(blocks[1].validation_error.is_none());
    }

    #[test]
    fn letter_reference_marks_nth_choice() {
        let body = "!!! quiz\n\n    1. Which is third? { data-correct=\"c\" }\n        - a\n        - b\n        - c\n        - d\n";
        let blocks = parse_all(body);

        assert!(blocks[0].validation_error.is_none());
        let correct: Vec<bool> = blocks[0].choices.iter().map(|c| c.is_correct).collect();
        assert_eq!(correct, vec![false, false, true, false]);
        assert_eq!(blocks[0].prompt, "Which is third?");
    }

    #[test]
    fn letter_reference_out_of_range() {
        let body = "!!! quiz\n\n    1. Which?\n        - a\n        - b\n        - c\n        - d\n        { data-correct=\"e\" }\n";
        let blocks = parse_all(body);

        assert_eq!(
            blocks[0].validation_error,
            Some(QuizError::InvalidAnswerReference)
        );
        assert_eq!(blocks[0].correct_count(), 0);
    }

    #[test]
    fn letter_reference_accepts_uppercase_and_single_quotes() {
        let body = "!!! quiz\n\n    1. Which? { data-correct='B' }\n        - a\n        - b\n";
        let blocks = parse_all(body);
        assert!(blocks[0].choices[1].is_correct);
        assert!(blocks[0].validation_error.is_none());
    }

    #[test]
    fn non_letter_reference_is_invalid() {
        let body = "!!! quiz\n\n    1. Which? { data-correct=\"2\" }\n        - a\n        - b\n";
        let blocks = parse_all(body);
        assert_eq!(
            blocks[0].validation_error,
            Some(QuizError::InvalidAnswerReference)
        );
    }

    #[test]
    fn legacy_lettered_choices() {
        let body = "!!! quiz\n\n    1. Old format\n        a) first\n        b) second { data-correct }\n";
        let blocks = parse_all(body);

        assert_eq!(blocks[0].choices.len(), 2);
        assert_eq!(blocks[0].choices[1].text, "second");
        assert!(blocks[0].validation_error.is_none());
    }

    #[test]
    fn multi_line_prompt_is_joined() {
        let body = "!!! quiz\n\n    1. Consider the code\n       below carefully.\n        - { data-correct } A\n";
        let blocks = parse_all(body);
        assert_eq!(blocks[0].prompt, "Consider the code below carefully.");
    }

    #[test]
    fn parses_heading_style_questions() {
        let body = "# Quiz\n\n## Question 1\n\nWhat does CPU stand for?\n\n- Central Program Unit\n- Central Processing Unit { data-correct }\n\n## Question 2\n\nPick the loop keyword.\n\n- { data-correct } for\n- if\n\n## Summary\n\n- not a choice\n";
        let blocks = parse_all(body);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].syntax, QuizSyntax::HeadingStyle);
        assert_eq!(blocks[0].prompt, "What does CPU stand for?");
        assert_eq!(blocks[0].start_line, 3);
        assert_eq!(blocks[0].end_line, 8);
        assert!(blocks[0].choices[1].is_correct);
        assert!(blocks[0].validation_error.is_none());

        assert_eq!(blocks[1].choices.len(), 2);
        assert!(blocks[1].validation_error.is_none());
    }

    #[test]
    fn quiz_syntax_inside_fence_is_ignored() {
        let body = "```markdown\n!!! quiz\n\n    1. Q?\n        - A\n## Question 1\n```\n";
        assert!(parse_all(body).is_empty());
    }

    #[test]
    fn iterator_is_lazy_and_finite() {
        let scanned = scan(ADMONITION, 0);
        let mut blocks = QuizBlocks::new(&scanned.lines);

        assert!(blocks.next().is_some());
        assert!(blocks.next().is_some());
        assert!(blocks.next().is_none());
        assert!(blocks.next().is_none());
    }

    #[test]
    fn no_error_iff_exactly_one_correct() {
        for marks in 0..4usize {
            let mut body = String::from("!!! quiz\n\n    1. Q?\n");
            for i in 0..4 {
                if i < marks {
                    body.push_str(&format!("        - {{ data-correct }} choice {}\n", i));
                } else {
                    body.push_str(&format!("        - choice {}\n", i));
                }
            }
            let block = &parse_all(&body)[0];
            assert_eq!(block.validation_error.is_none(), block.correct_count() == 1);
        }
    }

    #[test]
    fn canonical_markdown_reparses_identically() {
        let heading_style =
            "## Question 1\n\nWhich is a loop?\n\n- if\n- while\n- match\n\n{ data-correct=\"b\" }\n";
        let bad_letter = "!!! quiz\n\n    1. Which?\n        - a\n        - b\n        { data-correct=\"e\" }\n";
        let bad_letter_and_mark = "!!! quiz\n\n    1. Which? { data-correct=\"z\" }\n        - { data-correct } a\n        - b\n";
        let inputs = [ADMONITION, heading_style, bad_letter, bad_letter_and_mark];

        for input in inputs {
            for block in parse_all(input) {
                let reparsed = parse_all(&block.to_markdown());
                assert_eq!(reparsed.len(), 1);
                assert_eq!(reparsed[0].prompt, block.prompt);
                assert_eq!(reparsed[0].choices, block.choices);
                assert_eq!(reparsed[0].validation_error, block.validation_error);
            }
        }
    }

    #[test]
    fn invalid_reference_is_kept_for_emission() {
        let body = "!!! quiz\n\n    1. Which?\n        - a\n        - b\n        { data-correct=\"e\" }\n";
        let block = &parse_all(body)[0];

        assert_eq!(block.invalid_references, vec!["e".to_string()]);
        assert!(block.to_markdown().contains("{ data-correct=\"e\" }"));

        let reparsed = &parse_all(&block.to_markdown())[0];
        assert_eq!(
            reparsed.validation_error,
            Some(QuizError::InvalidAnswerReference)
        );
        assert_eq!(reparsed.invalid_references, block.invalid_references);
    }

    #[test]
    fn wrapped_choice_keeps_its_mark() {
        let body = "!!! quiz\n\n    1. Which loop checks first?\n        - do-while runs the body\n          once before testing\n        - while tests the condition\n          before the body { data-correct }\n";
        let block = &parse_all(body)[0];

        assert_eq!(block.choices.len(), 2);
        assert_eq!(block.choices[0].text, "do-while runs the body once before testing");
        assert!(!block.choices[0].is_correct);
        assert_eq!(
            block.choices[1].text,
            "while tests the condition before the body"
        );
        assert!(block.choices[1].is_correct);
        assert!(block.validation_error.is_none());
    }

    #[test]
    fn heading_style_wrapped_choice() {
        let body = "## Question 1\n\nPick one.\n\n- first\n  { data-correct }\n- second\n";
        let block = &parse_all(body)[0];

        assert!(block.choices[0].is_correct);
        assert_eq!(block.choices[0].text, "first");
        assert!(block.validation_error.is_none());
    }

    #[test]
    fn letter_index_mapping() {
        assert_eq!(letter_index("a"), Some(0));
        assert_eq!(letter_index("D"), Some(3));
        assert_eq!(letter_index(""), None);
        assert_eq!(letter_index("ab"), None);
        assert_eq!(letter_index("1"), None);
    }
}
