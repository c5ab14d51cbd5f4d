//! Inline marks on text nodes.

use serde_json::Value;

use crate::backend::RenderBackend;

/// Inline decoration attached to a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark<'a> {
    /// Strong emphasis.
    Bold,
    /// Emphasis.
    Italic,
    /// Inline code.
    Code,
    /// Hyperlink; `href` is empty when the mark carries none.
    Link {
        /// Link target, unescaped.
        href: &'a str,
    },
    /// Strikethrough.
    Strike,
}

impl<'a> Mark<'a> {
    /// Classify a mark value.
    ///
    /// Returns `None` for unknown or malformed marks, which callers skip.
    pub fn classify(value: &'a Value) -> Option<Self> {
        let map = value.as_object()?;
        let mark = match map.get("type")?.as_str()? {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "code" => Self::Code,
            "strike" => Self::Strike,
            "link" => Self::Link {
                href: map
                    .get("attrs")
                    .and_then(|attrs| attrs.get("href"))
                    .and_then(Value::as_str)
                    .unwrap_or_default(),
            },
            _ => return None,
        };
        Some(mark)
    }
}

/// Attributes added to every rendered link.
///
/// Empty values are omitted from the tag.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LinkAttrs {
    /// Browsing context (e.g. `_blank`).
    pub target: String,
    /// Link relationship (e.g. `noopener noreferrer`).
    pub rel: String,
    /// Styling hook class.
    pub class: String,
}

impl Default for LinkAttrs {
    fn default() -> Self {
        Self {
            target: "_blank".to_owned(),
            rel: "noopener noreferrer".to_owned(),
            class: "text-primary hover:underline".to_owned(),
        }
    }
}

/// Apply marks to already escaped text.
///
/// Marks fold left to right: the first mark wraps the text itself and every
/// later mark wraps the previous result, so `[bold, italic]` yields
/// `<em><strong>text</strong></em>`. Unknown marks leave the accumulator as is.
pub(crate) fn apply_marks<B: RenderBackend>(
    text: String,
    marks: &[Value],
    link: &LinkAttrs,
) -> String {
    marks
        .iter()
        .filter_map(Mark::classify)
        .fold(text, |acc, mark| B::wrap_mark(mark, &acc, link))
}
