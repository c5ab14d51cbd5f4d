//! Rich-text document renderer with pluggable backends.
//!
//! Blog posts and project write-ups are stored as document trees produced by
//! the editor (`doc` → `paragraph` → `text`, with inline marks). This crate
//! turns such a tree into markup using the [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! - The input is a generic [`serde_json::Value`]. Each value is classified
//!   into a typed node view; nothing about the input can make rendering fail.
//! - [`DocumentRenderer`] walks the tree recursively and delegates the actual
//!   tags to the backend. [`HtmlBackend`] produces semantic HTML5.
//! - Inline marks are applied as a left fold: the first mark is innermost.
//!
//! Malformed nodes degrade to empty output locally, the rest of the document
//! still renders. Image nodes without a source and subtrees deeper than the
//! configured limit are reported in [`RenderResult::warnings`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vibedev_renderer::{DocumentRenderer, HtmlBackend};
//!
//! let doc = json!({
//!     "type": "doc",
//!     "content": [
//!         {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Hello"}]},
//!         {"type": "paragraph", "content": [{"type": "text", "text": "World", "marks": [{"type": "bold"}]}]}
//!     ]
//! });
//! let result = DocumentRenderer::<HtmlBackend>::new()
//!     .with_title_extraction()
//!     .render_document(&doc);
//! assert_eq!(result.html, "<h1>Hello</h1><p><strong>World</strong></p>");
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```

mod backend;
mod error;
mod html;
mod marks;
mod node;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use error::RenderError;
pub use html::HtmlBackend;
pub use marks::{LinkAttrs, Mark};
pub use renderer::{DEFAULT_MAX_DEPTH, DocumentRenderer, RenderResult, render};
pub use state::escape_html;
