//! Terminal UI.
//!
//! Reports go to stdout so they can be piped. Status lines go to stderr.

use console::Term;
use std::io::Write;

use super::{LintTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LintTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            LintTheme::new()
        } else {
            LintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        write!(self.out, "{}", msg).ok();
        self.out.flush().ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let _ui = TerminalUI::new(false);
        let _ui = TerminalUI::new(true);
    }
}
