//! Tree produced by the HTML grammar.

/// Elements without content or end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is kept verbatim.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Verbatim elements which may still contain character references.
pub const ESCAPABLE_RAW_TEXT_ELEMENTS: &[&str] = &["textarea", "title"];

/// Attributes serialized by name only.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "readonly",
    "required",
    "reversed",
    "selected",
];

pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// How an element's content is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Kind {
    Void,
    RawText,
    EscapableRawText,
    /// Autonomous custom element, any tag name containing `-`.
    Custom,
    Normal,
}

impl Kind {
    /// Kind of the element named `tag_name`, which must be lowercase.
    pub fn of(tag_name: &str) -> Self {
        if VOID_ELEMENTS.contains(&tag_name) {
            Kind::Void
        } else if RAW_TEXT_ELEMENTS.contains(&tag_name) {
            Kind::RawText
        } else if ESCAPABLE_RAW_TEXT_ELEMENTS.contains(&tag_name) {
            Kind::EscapableRawText
        } else if tag_name.contains('-') {
            Kind::Custom
        } else {
            Kind::Normal
        }
    }

    pub fn is_raw_text(self) -> bool {
        matches!(self, Kind::RawText | Kind::EscapableRawText)
    }
}

/// A node of an HTML fragment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Node {
    /// Text content, kept exactly as written, whitespace included.
    Text(String),

    /// The text between `<!--` and `-->`.
    Comment(String),

    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }
}

/// An HTML element. Tag and attribute names are lowercase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Element {
    pub tag_name: String,
    pub kind: Kind,
    /// In source order, duplicates kept. Attributes without a value map to
    /// an empty string.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(
        tag_name: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    ) -> Self {
        let tag_name = tag_name.into();
        Element {
            kind: Kind::of(&tag_name),
            tag_name,
            attributes,
            children,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
