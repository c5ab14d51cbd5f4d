//! Typed view over editor document JSON.
//!
//! Stored documents are untyped JSON, and older posts contain shapes the
//! current editor would never produce. Classification here is lenient: wrong
//! types are treated as absent so the renderer can always make progress.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Heading level used when `attrs.level` is missing or unusable.
pub(crate) const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Classified renderer input.
#[derive(Debug)]
pub(crate) enum Input<'a> {
    /// Pre-rendered markup, passed through unchanged.
    Markup(&'a str),
    /// A node with a string discriminator.
    Node(Node<'a>),
    /// Anything else: `null`, numbers, arrays, objects without a non-empty `type`.
    Invalid,
}

impl<'a> Input<'a> {
    pub(crate) fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(markup) => Self::Markup(markup),
            Value::Object(map) => match map.get("type").and_then(Value::as_str) {
                Some(node_type) if !node_type.is_empty() => {
                    Self::Node(Node::from_map(node_type, map))
                }
                _ => Self::Invalid,
            },
            _ => Self::Invalid,
        }
    }
}

/// A document node with its children.
#[derive(Debug)]
pub(crate) struct Node<'a> {
    pub(crate) kind: NodeKind<'a>,
    /// Child nodes; empty when `content` is absent or not an array.
    pub(crate) content: &'a [Value],
}

/// Node variant with the attributes each variant needs.
#[derive(Debug, PartialEq)]
pub(crate) enum NodeKind<'a> {
    Doc,
    Paragraph,
    Heading { level: u8 },
    BulletList,
    OrderedList,
    ListItem,
    CodeBlock { language: Option<&'a str> },
    Blockquote,
    Image(ImageAttrs<'a>),
    HorizontalRule,
    HardBreak,
    Text { text: &'a str, marks: &'a [Value] },
    Unknown(&'a str),
}

/// Image attributes after `src`/`url` fallback.
#[derive(Debug, PartialEq)]
pub(crate) struct ImageAttrs<'a> {
    /// Usable source, `None` if neither `src` nor `url` holds a non-blank string.
    pub(crate) src: Option<&'a str>,
    pub(crate) alt: &'a str,
    pub(crate) title: &'a str,
}

impl<'a> Node<'a> {
    fn from_map(node_type: &'a str, map: &'a Map<String, Value>) -> Self {
        let attrs = map.get("attrs").and_then(Value::as_object);
        let kind = match node_type {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading {
                level: heading_level(attrs),
            },
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "codeBlock" => NodeKind::CodeBlock {
                language: attr_str(attrs, "language")
                    .filter(|lang| !lang.trim().is_empty()),
            },
            "blockquote" => NodeKind::Blockquote,
            "image" => NodeKind::Image(ImageAttrs {
                src: usable(attr_str(attrs, "src"))
                    .or_else(|| usable(attr_str(attrs, "url"))),
                alt: attr_str(attrs, "alt").unwrap_or_default(),
                title: attr_str(attrs, "title").unwrap_or_default(),
            }),
            "horizontalRule" => NodeKind::HorizontalRule,
            "hardBreak" => NodeKind::HardBreak,
            "text" => NodeKind::Text {
                text: map.get("text").and_then(Value::as_str).unwrap_or_default(),
                marks: array(map.get("marks")),
            },
            other => NodeKind::Unknown(other),
        };

        // Leaf variants never have children, whatever the payload says.
        let content: &[Value] = if kind.is_leaf() {
            &[]
        } else {
            array(map.get("content"))
        };

        Self { kind, content }
    }
}

impl NodeKind<'_> {
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Image(_) | Self::HorizontalRule | Self::HardBreak | Self::Text { .. }
        )
    }
}

/// Collect the plain text of a subtree (used for title extraction).
///
/// Hard breaks become spaces; marks and markup pass-through strings are ignored.
pub(crate) fn plain_text(content: &[Value], depth_left: usize, out: &mut String) {
    let Some(depth_left) = depth_left.checked_sub(1) else {
        return;
    };
    for child in content {
        if let Input::Node(node) = Input::classify(child) {
            match node.kind {
                NodeKind::Text { text, .. } => out.push_str(text),
                NodeKind::HardBreak => out.push(' '),
                _ => plain_text(node.content, depth_left, out),
            }
        }
    }
}

/// Parse stored document JSON of any nesting depth.
///
/// serde_json stops at 128 levels by default, and every document level costs
/// two (the node object and its `content` array). The recursion limit is lifted
/// and the stack grows on demand instead; the renderer's depth guard bounds
/// what is actually rendered.
pub(crate) fn parse(json: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Drop a parsed tree without recursing, so arbitrarily deep input can't
/// overflow the stack on the way out.
pub(crate) fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            _ => {}
        }
    }
}

fn heading_level(attrs: Option<&Map<String, Value>>) -> u8 {
    let level = attrs.and_then(|a| a.get("level")).and_then(|level| {
        level
            .as_u64()
            .or_else(|| level.as_str().and_then(|s| s.trim().parse().ok()))
    });
    match level {
        // Clamped into the range HTML has tags for.
        Some(n) => u8::try_from(n.clamp(1, 6)).unwrap_or(DEFAULT_HEADING_LEVEL),
        None => DEFAULT_HEADING_LEVEL,
    }
}

fn attr_str<'a>(attrs: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a str> {
    attrs?.get(key)?.as_str()
}

fn usable(src: Option<&str>) -> Option<&str> {
    src.filter(|s| !s.trim().is_empty())
}

fn array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn kind_of(value: &Value) -> NodeKind<'_> {
        match Input::classify(value) {
            Input::Node(node) => node.kind,
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_non_objects() {
        assert!(matches!(Input::classify(&Value::Null), Input::Invalid));
        assert!(matches!(Input::classify(&json!(42)), Input::Invalid));
        assert!(matches!(Input::classify(&json!([1, 2])), Input::Invalid));
        assert!(matches!(Input::classify(&json!("<b>x</b>")), Input::Markup("<b>x</b>")));
    }

    #[test]
    fn test_classify_missing_type() {
        assert!(matches!(Input::classify(&json!({"content": []})), Input::Invalid));
        assert!(matches!(Input::classify(&json!({"type": 7})), Input::Invalid));
        assert!(matches!(Input::classify(&json!({"type": ""})), Input::Invalid));
    }

    #[test]
    fn test_parse_beyond_default_recursion_limit() {
        let levels = 2000;
        let json = format!(
            "{}{{\"type\":\"text\",\"text\":\"leaf\"}}{}",
            r#"{"type":"blockquote","content":["#.repeat(levels),
            "]}".repeat(levels)
        );
        let value = parse(&json).unwrap();

        let mut current = &value;
        let mut depth = 0;
        while let Some(child) = current.get("content").and_then(|c| c.get(0)) {
            current = child;
            depth += 1;
        }
        assert_eq!(depth, levels);
        assert_eq!(current["text"], "leaf");
        dismantle(value);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse("{\"type\": ").is_err());
        assert!(parse("{} trailing").is_err());
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(
            kind_of(&json!({"type": "heading", "attrs": {"level": 3}})),
            NodeKind::Heading { level: 3 }
        );
        assert_eq!(
            kind_of(&json!({"type": "heading"})),
            NodeKind::Heading { level: 2 }
        );
        assert_eq!(
            kind_of(&json!({"type": "heading", "attrs": {"level": "4"}})),
            NodeKind::Heading { level: 4 }
        );
        assert_eq!(
            kind_of(&json!({"type": "heading", "attrs": {"level": 9}})),
            NodeKind::Heading { level: 6 }
        );
        assert_eq!(
            kind_of(&json!({"type": "heading", "attrs": {"level": 0}})),
            NodeKind::Heading { level: 1 }
        );
        assert_eq!(
            kind_of(&json!({"type": "heading", "attrs": {"level": -1}})),
            NodeKind::Heading { level: 2 }
        );
    }

    #[test]
    fn test_image_src_fallback() {
        let image = json!({"type": "image", "attrs": {"url": "/a.png", "alt": "A"}});
        assert_eq!(
            kind_of(&image),
            NodeKind::Image(ImageAttrs {
                src: Some("/a.png"),
                alt: "A",
                title: "",
            })
        );

        let blank = json!({"type": "image", "attrs": {"src": "  ", "url": "/b.png"}});
        let NodeKind::Image(attrs) = kind_of(&blank) else {
            panic!("expected image");
        };
        assert_eq!(attrs.src, Some("/b.png"));

        let missing = json!({"type": "image", "attrs": {"src": 12}});
        let NodeKind::Image(attrs) = kind_of(&missing) else {
            panic!("expected image");
        };
        assert_eq!(attrs.src, None);
    }

    #[test]
    fn test_text_ignores_content() {
        let value = json!({"type": "text", "text": "hi", "content": [{"type": "text", "text": "no"}]});
        let Input::Node(node) = Input::classify(&value) else {
            panic!("expected node");
        };
        assert!(node.content.is_empty());
        assert!(matches!(node.kind, NodeKind::Text { text: "hi", .. }));
    }

    #[test]
    fn test_non_array_content_is_empty() {
        let value = json!({"type": "paragraph", "content": "oops"});
        let Input::Node(node) = Input::classify(&value) else {
            panic!("expected node");
        };
        assert!(node.content.is_empty());
    }

    #[test]
    fn test_unknown_keeps_name() {
        assert_eq!(
            kind_of(&json!({"type": "mention"})),
            NodeKind::Unknown("mention")
        );
    }

    #[test]
    fn test_plain_text() {
        let content = json!([
            {"type": "text", "text": "Hello", "marks": [{"type": "bold"}]},
            {"type": "hardBreak"},
            {"type": "mention", "content": [{"type": "text", "text": "world"}]}
        ]);
        let mut out = String::new();
        plain_text(content.as_array().unwrap(), 8, &mut out);
        assert_eq!(out, "Hello world");
    }

    #[test]
    fn test_plain_text_respects_depth() {
        let content = json!([{"type": "mention", "content": [{"type": "text", "text": "deep"}]}]);
        let mut out = String::new();
        plain_text(content.as_array().unwrap(), 1, &mut out);
        assert_eq!(out, "");
    }
}
