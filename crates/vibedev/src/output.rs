//! Terminal reporting for CLI commands.

use std::fmt::{Arguments, Display};
use std::path::Path;

use console::{Style, Term};

/// Reports on stderr so rendered HTML on stdout stays clean.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Render diagnostic (yellow).
    pub(crate) fn diagnostic(&self, warning: &str) {
        self.line(&Style::new().yellow(), format_args!("Warning: {warning}"));
    }

    /// Extracted document title (cyan bold).
    pub(crate) fn title(&self, title: &str) {
        self.line(&Style::new().cyan().bold(), format_args!("Title: {title}"));
    }

    /// Rendered output written to `path` (green).
    pub(crate) fn rendered(&self, path: &Path) {
        self.line(
            &Style::new().green(),
            format_args!("Rendered to {}", path.display()),
        );
    }

    /// Fatal command error (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&Style::new().red(), format_args!("Error: {err}"));
    }

    fn line(&self, style: &Style, msg: Arguments<'_>) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
