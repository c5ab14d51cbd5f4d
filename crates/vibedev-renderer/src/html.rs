//! HTML backend for document rendering.
//!
//! Produces semantic HTML5 output suitable for injecting into a page.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::marks::{LinkAttrs, Mark};
use crate::state::escape_html;

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images
/// - `<a>` links opened in a new browsing context
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn paragraph_start(out: &mut String) {
        out.push_str("<p>");
    }

    fn paragraph_end(out: &mut String) {
        out.push_str("</p>");
    }

    fn heading_start(level: u8, out: &mut String) {
        write!(out, "<h{level}>").unwrap();
    }

    fn heading_end(level: u8, out: &mut String) {
        write!(out, "</h{level}>").unwrap();
    }

    fn list_start(ordered: bool, out: &mut String) {
        out.push_str(if ordered { "<ol>" } else { "<ul>" });
    }

    fn list_end(ordered: bool, out: &mut String) {
        out.push_str(if ordered { "</ol>" } else { "</ul>" });
    }

    fn list_item_start(out: &mut String) {
        out.push_str("<li>");
    }

    fn list_item_end(out: &mut String) {
        out.push_str("</li>");
    }

    fn code_block_start(lang: Option<&str>, out: &mut String) {
        if let Some(lang) = lang {
            write!(out, r#"<pre><code class="language-{}">"#, escape_html(lang)).unwrap();
        } else {
            out.push_str("<pre><code>");
        }
    }

    fn code_block_end(out: &mut String) {
        out.push_str("</code></pre>");
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        write!(
            out,
            r#"<img src="{}" alt="{}" title="{}">"#,
            escape_html(src),
            escape_html(alt),
            escape_html(title)
        )
        .unwrap();
    }

    fn wrap_mark(mark: Mark<'_>, inner: &str, link: &LinkAttrs) -> String {
        match mark {
            Mark::Bold => format!("<strong>{inner}</strong>"),
            Mark::Italic => format!("<em>{inner}</em>"),
            Mark::Code => format!("<code>{inner}</code>"),
            Mark::Strike => format!("<s>{inner}</s>"),
            Mark::Link { href } => {
                let mut tag = format!(r#"<a href="{}""#, escape_html(href));
                push_attr(&mut tag, "target", &link.target);
                push_attr(&mut tag, "rel", &link.rel);
                push_attr(&mut tag, "class", &link.class);
                write!(tag, ">{inner}</a>").unwrap();
                tag
            }
        }
    }
}

/// Append ` name="value"` unless `value` is empty.
fn push_attr(tag: &mut String, name: &str, value: &str) {
    if !value.is_empty() {
        write!(tag, r#" {name}="{}""#, escape_html(value)).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        HtmlBackend::code_block_start(Some("rust"), &mut out);
        out.push_str("fn main() {}");
        HtmlBackend::code_block_end(&mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let mut out = String::new();
        HtmlBackend::code_block_start(None, &mut out);
        out.push_str("plain code");
        HtmlBackend::code_block_end(&mut out);
        assert_eq!(out, "<pre><code>plain code</code></pre>");
    }

    #[test]
    fn test_code_block_language_escaped() {
        let mut out = String::new();
        HtmlBackend::code_block_start(Some(r#"x"><script>"#), &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-x&quot;&gt;&lt;script&gt;">"#
        );
    }

    #[test]
    fn test_blockquote() {
        let mut out = String::new();
        HtmlBackend::blockquote_start(&mut out);
        out.push_str("content");
        HtmlBackend::blockquote_end(&mut out);
        assert_eq!(out, "<blockquote>content</blockquote>");
    }

    #[test]
    fn test_heading_levels() {
        let mut out = String::new();
        HtmlBackend::heading_start(4, &mut out);
        out.push_str("T");
        HtmlBackend::heading_end(4, &mut out);
        assert_eq!(out, "<h4>T</h4>");
    }

    #[test]
    fn test_lists() {
        let mut out = String::new();
        HtmlBackend::list_start(true, &mut out);
        HtmlBackend::list_item_start(&mut out);
        HtmlBackend::list_item_end(&mut out);
        HtmlBackend::list_end(true, &mut out);
        HtmlBackend::list_start(false, &mut out);
        HtmlBackend::list_end(false, &mut out);
        assert_eq!(out, "<ol><li></li></ol><ul></ul>");
    }

    #[test]
    fn test_image() {
        let mut out = String::new();
        HtmlBackend::image("image.png", "Alt text", "", &mut out);
        assert_eq!(out, r#"<img src="image.png" alt="Alt text" title="">"#);
    }

    #[test]
    fn test_image_attributes_escaped() {
        let mut out = String::new();
        HtmlBackend::image(r#"a.png" onerror="x"#, "<b>", "Tom & Jerry", &mut out);
        assert_eq!(
            out,
            r#"<img src="a.png&quot; onerror=&quot;x" alt="&lt;b&gt;" title="Tom &amp; Jerry">"#
        );
    }

    #[test]
    fn test_fixed_tags() {
        let mut out = String::new();
        HtmlBackend::hard_break(&mut out);
        HtmlBackend::horizontal_rule(&mut out);
        HtmlBackend::empty_paragraph(&mut out);
        HtmlBackend::truncated(&mut out);
        assert_eq!(out, "<br><hr><br><!-- truncated -->");
    }

    #[test]
    fn test_simple_marks() {
        let link = LinkAttrs::default();
        assert_eq!(
            HtmlBackend::wrap_mark(Mark::Bold, "x", &link),
            "<strong>x</strong>"
        );
        assert_eq!(HtmlBackend::wrap_mark(Mark::Italic, "x", &link), "<em>x</em>");
        assert_eq!(
            HtmlBackend::wrap_mark(Mark::Code, "x", &link),
            "<code>x</code>"
        );
        assert_eq!(HtmlBackend::wrap_mark(Mark::Strike, "x", &link), "<s>x</s>");
    }

    #[test]
    fn test_link_mark() {
        let out = HtmlBackend::wrap_mark(
            Mark::Link {
                href: "https://x.test/?a=1&b=2",
            },
            "click",
            &LinkAttrs::default(),
        );
        assert_eq!(
            out,
            r#"<a href="https://x.test/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">click</a>"#
        );
    }

    #[test]
    fn test_link_mark_omits_empty_attrs() {
        let link = LinkAttrs {
            target: String::new(),
            rel: String::new(),
            class: "link".to_owned(),
        };
        let out = HtmlBackend::wrap_mark(Mark::Link { href: "" }, "x", &link);
        assert_eq!(out, r#"<a href="" class="link">x</a>"#);
    }
}
