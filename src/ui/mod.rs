//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`LintTheme`] styles built on `console`

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LintTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write report text as-is to the report stream (stdout).
    fn message(&mut self, msg: &str);

    /// Display a success status line.
    fn success(&mut self, msg: &str);

    /// Display a warning status line.
    fn warning(&mut self, msg: &str);

    /// Display an error status line.
    fn error(&mut self, msg: &str);
}
