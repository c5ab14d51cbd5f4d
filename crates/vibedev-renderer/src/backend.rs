//! Render backend trait for format-specific output.
//!
//! The recursive driver decides *what* to render (traversal order, fallbacks,
//! depth limit, diagnostics); the backend decides which tags represent each
//! node variant. All string arguments are already escaped unless noted.

use crate::marks::{LinkAttrs, Mark};

/// Backend trait for format-specific rendering operations.
///
/// Block variants are split into start/end pairs so children can be written
/// straight into the shared output buffer.
pub trait RenderBackend {
    /// Render paragraph start tag.
    fn paragraph_start(out: &mut String);

    /// Render paragraph end tag.
    fn paragraph_end(out: &mut String);

    /// Render the placeholder written into a paragraph with no content.
    ///
    /// Keeps an intentionally blank line visible. Defaults to a hard break.
    fn empty_paragraph(out: &mut String) {
        Self::hard_break(out);
    }

    /// Render heading start tag for `level` (1-6).
    fn heading_start(level: u8, out: &mut String);

    /// Render heading end tag for `level` (1-6).
    fn heading_end(level: u8, out: &mut String);

    /// Render list start tag.
    ///
    /// # Arguments
    ///
    /// * `ordered` - `true` for numbered lists, `false` for bullet lists
    /// * `out` - Output buffer to write to
    fn list_start(ordered: bool, out: &mut String);

    /// Render list end tag.
    fn list_end(ordered: bool, out: &mut String);

    /// Render list item start tag.
    fn list_item_start(out: &mut String);

    /// Render list item end tag.
    fn list_item_end(out: &mut String);

    /// Render code block start.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "rust", "python"), unescaped
    /// * `out` - Output buffer to write to
    fn code_block_start(lang: Option<&str>, out: &mut String);

    /// Render code block end.
    fn code_block_end(out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL, unescaped
    /// * `alt` - Alt text for the image, unescaped
    /// * `title` - Title attribute, unescaped (may be empty)
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Wrap already rendered inline content in a mark.
    ///
    /// # Arguments
    ///
    /// * `mark` - Mark to apply (link href is unescaped)
    /// * `inner` - Rendered content the mark wraps
    /// * `link` - Attributes added to links
    fn wrap_mark(mark: Mark<'_>, inner: &str, link: &LinkAttrs) -> String;

    /// Render a hard break.
    ///
    /// Default uses `<br>`.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    ///
    /// Default uses `<hr>`.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render the marker that replaces a subtree nested beyond the depth limit.
    fn truncated(out: &mut String) {
        out.push_str("<!-- truncated -->");
    }
}
