//! Generic document renderer with pluggable backend.

use std::marker::PhantomData;

use serde_json::Value;

use crate::backend::RenderBackend;
use crate::error::RenderError;
use crate::html::HtmlBackend;
use crate::marks::{LinkAttrs, apply_marks};
use crate::node::{self, ImageAttrs, Input, Node, NodeKind, plain_text};
use crate::state::{RenderState, escape_html};

/// Default nesting limit for [`DocumentRenderer::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Result of rendering a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Plain text of the first H1 heading (if title extraction was enabled).
    pub title: Option<String>,
    /// Diagnostics in document order (images without a source, truncated subtrees).
    pub warnings: Vec<String>,
}

/// Generic document renderer with pluggable backend.
///
/// The renderer holds configuration only. Every call keeps its own state, so
/// one instance can be shared between threads and reused for any number of
/// documents.
///
/// Rendering is total: unknown node types fall back to rendering their
/// children, malformed attributes are treated as absent, and nothing in the
/// input can make a call fail or panic.
pub struct DocumentRenderer<B: RenderBackend> {
    max_depth: usize,
    link: LinkAttrs,
    extract_title: bool,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> DocumentRenderer<B> {
    /// Create a new renderer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            link: LinkAttrs::default(),
            extract_title: false,
            _backend: PhantomData,
        }
    }

    /// Set the maximum nesting depth (the root node is at depth 1).
    ///
    /// A node nested deeper than this is replaced by a truncation marker and
    /// reported in [`RenderResult::warnings`]; its siblings still render.
    /// A limit of 0 is treated as 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Set the attributes added to rendered links.
    #[must_use]
    pub fn with_link_attrs(mut self, link: LinkAttrs) -> Self {
        self.link = link;
        self
    }

    /// Enable title extraction from the first H1 heading.
    ///
    /// The heading is still rendered; its plain text is also returned in
    /// [`RenderResult::title`].
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.extract_title = true;
        self
    }

    /// Render a document tree.
    ///
    /// - Strings are pre-rendered markup and are returned unchanged.
    /// - `null`, numbers, arrays and objects without a string `type` render
    ///   as an empty string.
    pub fn render_document(&self, value: &Value) -> RenderResult {
        let mut state = RenderState::new(self.extract_title);
        let mut html = String::new();
        self.render_value(value, 1, &mut state, &mut html);

        let (title, warnings) = state.finish();
        tracing::debug!(
            html_len = html.len(),
            warnings = warnings.len(),
            "Document rendered"
        );
        RenderResult {
            html,
            title,
            warnings,
        }
    }

    /// Parse stored JSON text and render it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if `json` is not valid JSON. Any valid
    /// JSON renders, however deeply it nests: subtrees past the depth limit
    /// are truncated like in [`render_document`](Self::render_document).
    pub fn render_json(&self, json: &str) -> Result<RenderResult, RenderError> {
        let value = node::parse(json)?;
        let result = self.render_document(&value);
        node::dismantle(value);
        Ok(result)
    }

    fn render_value(
        &self,
        value: &Value,
        depth: usize,
        state: &mut RenderState,
        out: &mut String,
    ) {
        match Input::classify(value) {
            Input::Markup(markup) => out.push_str(markup),
            Input::Invalid => {}
            Input::Node(node) => {
                if depth > self.max_depth {
                    tracing::warn!(
                        depth,
                        max_depth = self.max_depth,
                        "Document nested too deeply, truncating"
                    );
                    state.push_warning(format!(
                        "Content nested deeper than {} levels was truncated",
                        self.max_depth
                    ));
                    B::truncated(out);
                    return;
                }
                self.render_node(node, depth, state, out);
            }
        }
    }

    fn render_children(
        &self,
        content: &[Value],
        depth: usize,
        state: &mut RenderState,
        out: &mut String,
    ) {
        for child in content {
            self.render_value(child, depth + 1, state, out);
        }
    }

    fn render_node(
        &self,
        node: Node<'_>,
        depth: usize,
        state: &mut RenderState,
        out: &mut String,
    ) {
        let Node { kind, content } = node;
        match kind {
            NodeKind::Doc => self.render_children(content, depth, state, out),
            NodeKind::Paragraph => {
                B::paragraph_start(out);
                let body_start = out.len();
                self.render_children(content, depth, state, out);
                if out.len() == body_start {
                    B::empty_paragraph(out);
                }
                B::paragraph_end(out);
            }
            NodeKind::Heading { level } => {
                if state.wants_title(level) {
                    let mut text = String::new();
                    plain_text(content, self.max_depth.saturating_sub(depth), &mut text);
                    if !text.trim().is_empty() {
                        state.set_title(&text);
                    }
                }
                B::heading_start(level, out);
                self.render_children(content, depth, state, out);
                B::heading_end(level, out);
            }
            NodeKind::BulletList => {
                B::list_start(false, out);
                self.render_children(content, depth, state, out);
                B::list_end(false, out);
            }
            NodeKind::OrderedList => {
                B::list_start(true, out);
                self.render_children(content, depth, state, out);
                B::list_end(true, out);
            }
            NodeKind::ListItem => {
                B::list_item_start(out);
                self.render_children(content, depth, state, out);
                B::list_item_end(out);
            }
            NodeKind::CodeBlock { language } => {
                B::code_block_start(language, out);
                self.render_children(content, depth, state, out);
                B::code_block_end(out);
            }
            NodeKind::Blockquote => {
                B::blockquote_start(out);
                self.render_children(content, depth, state, out);
                B::blockquote_end(out);
            }
            NodeKind::Image(ImageAttrs { src, alt, title }) => match src {
                Some(src) => B::image(src, alt, title, out),
                None => {
                    tracing::warn!(alt, title, "Image node has no src, skipping");
                    state.push_warning("Image node without src or url was skipped".to_owned());
                }
            },
            NodeKind::HorizontalRule => B::horizontal_rule(out),
            NodeKind::HardBreak => B::hard_break(out),
            NodeKind::Text { text, marks } => {
                out.push_str(&apply_marks::<B>(escape_html(text), marks, &self.link));
            }
            NodeKind::Unknown(node_type) => {
                tracing::trace!(node_type, "Unknown node type, rendering children");
                self.render_children(content, depth, state, out);
            }
        }
    }
}

impl<B: RenderBackend> Default for DocumentRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a document tree to HTML with default settings.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let html = vibedev_renderer::render(&json!({
///     "type": "paragraph",
///     "content": [{"type": "text", "text": "hi"}]
/// }));
/// assert_eq!(html, "<p>hi</p>");
/// ```
pub fn render(value: &Value) -> String {
    DocumentRenderer::<HtmlBackend>::new()
        .render_document(value)
        .html
}
