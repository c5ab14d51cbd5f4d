//! Per-call render state.
//!
//! A [`DocumentRenderer`](crate::DocumentRenderer) is shared between calls, so
//! everything that accumulates while walking one tree lives here instead.

/// State collected while rendering a single document.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    /// Whether to capture the first H1 as the document title.
    extract_title: bool,
    /// Title captured from the first H1.
    title: Option<String>,
    /// Diagnostics in document order.
    warnings: Vec<String>,
}

impl RenderState {
    pub(crate) fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            ..Self::default()
        }
    }

    /// Check whether a heading at `level` should become the title.
    pub(crate) fn wants_title(&self, level: u8) -> bool {
        self.extract_title && level == 1 && self.title.is_none()
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = Some(title.trim().to_owned());
    }

    /// Record a diagnostic for the caller.
    pub(crate) fn push_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Consume the state, returning (title, warnings).
    pub(crate) fn finish(self) -> (Option<String>, Vec<String>) {
        (self.title, self.warnings)
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
