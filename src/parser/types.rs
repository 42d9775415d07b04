use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level shape of a `.boxnote` file. Only `doc` is read; everything else
/// (version stamps, author palettes, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxNote {
    #[serde(default)]
    pub doc: Option<Node>,
}

/// A node of the document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NodeKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attrs: Attrs,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// An inline formatting annotation carried by a text node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Mark {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: MarkKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self {
            kind,
            attrs: Attrs::default(),
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        let mut mark = Self::new(MarkKind::Link);
        mark.attrs.insert("href".to_string(), AttrValue::String(href.into()));
        mark
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Doc,
    Heading,
    Paragraph,
    Text,
    HardBreak,
    BulletList,
    OrderedList,
    ListItem,
    CheckList,
    CheckListItem,
    HorizontalRule,
    Blockquote,
    CallOutBox,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    /// Any tag outside the supported set, kept verbatim. An empty tag means
    /// the node had no `type` at all.
    Unknown(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Doc => "doc",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::HardBreak => "hard_break",
            NodeKind::BulletList => "bullet_list",
            NodeKind::OrderedList => "ordered_list",
            NodeKind::ListItem => "list_item",
            NodeKind::CheckList => "check_list",
            NodeKind::CheckListItem => "check_list_item",
            NodeKind::HorizontalRule => "horizontal_rule",
            NodeKind::Blockquote => "blockquote",
            NodeKind::CallOutBox => "call_out_box",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableHeader => "table_header",
            NodeKind::TableCell => "table_cell",
            NodeKind::Unknown(tag) => tag,
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Unknown(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "doc" => NodeKind::Doc,
            "heading" => NodeKind::Heading,
            "paragraph" => NodeKind::Paragraph,
            "text" => NodeKind::Text,
            "hard_break" => NodeKind::HardBreak,
            "bullet_list" => NodeKind::BulletList,
            "ordered_list" => NodeKind::OrderedList,
            "list_item" => NodeKind::ListItem,
            "check_list" => NodeKind::CheckList,
            "check_list_item" => NodeKind::CheckListItem,
            "horizontal_rule" => NodeKind::HorizontalRule,
            "blockquote" => NodeKind::Blockquote,
            "call_out_box" => NodeKind::CallOutBox,
            "table" => NodeKind::Table,
            "table_row" => NodeKind::TableRow,
            "table_header" => NodeKind::TableHeader,
            "table_cell" => NodeKind::TableCell,
            _ => NodeKind::Unknown(tag),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::from(tag.to_string())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum MarkKind {
    Link,
    Strong,
    Em,
    Underline,
    Strikethrough,
    Code,
    AuthorId,
    FontSize,
    FontColor,
    Highlight,
    Unknown(String),
}

impl MarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Link => "link",
            MarkKind::Strong => "strong",
            MarkKind::Em => "em",
            MarkKind::Underline => "underline",
            MarkKind::Strikethrough => "strikethrough",
            MarkKind::Code => "code",
            MarkKind::AuthorId => "author_id",
            MarkKind::FontSize => "font_size",
            MarkKind::FontColor => "font_color",
            MarkKind::Highlight => "highlight",
            MarkKind::Unknown(tag) => tag,
        }
    }

    /// Presentation-only marks that never reach the Markdown output.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            MarkKind::AuthorId | MarkKind::FontSize | MarkKind::FontColor | MarkKind::Highlight
        )
    }
}

impl Default for MarkKind {
    fn default() -> Self {
        MarkKind::Unknown(String::new())
    }
}

impl From<String> for MarkKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "link" => MarkKind::Link,
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            "underline" => MarkKind::Underline,
            "strikethrough" => MarkKind::Strikethrough,
            "code" => MarkKind::Code,
            "author_id" => MarkKind::AuthorId,
            "font_size" => MarkKind::FontSize,
            "font_color" => MarkKind::FontColor,
            "highlight" => MarkKind::Highlight,
            _ => MarkKind::Unknown(tag),
        }
    }
}

impl From<&str> for MarkKind {
    fn from(tag: &str) -> Self {
        MarkKind::from(tag.to_string())
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attribute value. Numbers may arrive as floats even for
/// integer-valued attributes such as heading levels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

/// Open attribute map with best-effort typed accessors. A missing key or a
/// value of the wrong type reads as absent instead of failing the render.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Attrs(BTreeMap<String, AttrValue>);

impl Attrs {
    pub fn insert(&mut self, key: String, value: AttrValue) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer view of `key`. Floats are truncated toward zero.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            AttrValue::Int(value) => Some(*value),
            AttrValue::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            _ => None,
        }
    }

    /// True only for a boolean `true`; strings like `"true"` do not count.
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(AttrValue::Bool(true)))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            AttrValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl FromIterator<(String, AttrValue)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Attrs(iter.into_iter().collect())
    }
}

// ProseMirror exports write `null` for empty attrs/content/marks.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
