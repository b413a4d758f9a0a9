//! Built-in lint rules.
//!
//! Unreadable files are reported first. The core structural checks follow
//! in a fixed order: answer keys, empty questions, heading skips, broken
//! links, then missing titles. The rest are content-hygiene checks,
//! ending with blank-line layout.

pub mod broken_link;
pub mod duplicate_document;
pub mod empty_question;
pub mod heading_skip;
pub mod heading_spacing;
pub mod list_spacing;
pub mod missing_title;
pub mod multiple_h1;
pub mod quiz_answer;
pub mod read_failure;
pub mod section_numbering;
pub mod title_mismatch;
pub mod unclosed_fence;

pub use broken_link::BrokenLinkRule;
pub use duplicate_document::DuplicateDocumentRule;
pub use empty_question::EmptyQuestionRule;
pub use heading_skip::HeadingSkipRule;
pub use heading_spacing::HeadingSpacingRule;
pub use list_spacing::ListSpacingRule;
pub use missing_title::MissingTitleRule;
pub use multiple_h1::MultipleH1Rule;
pub use quiz_answer::QuizAnswerRule;
pub use read_failure::ReadFailureRule;
pub use section_numbering::SectionNumberingRule;
pub use title_mismatch::TitleMismatchRule;
pub use unclosed_fence::UnclosedFenceRule;

/// Maximum characters of a prompt quoted in a message.
const EXCERPT_LEN: usize = 60;

/// Shorten `text` for quoting in a finding message.
pub(crate) fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_LEN - 3).collect();
    format!("{}...", cut.trim_end())
}
