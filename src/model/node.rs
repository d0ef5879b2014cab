//! Block and inline node types.

use serde::{Deserialize, Serialize};

/// A block-level node in a document.
///
/// The wire encoding is internally tagged: `{"type": "paragraph", ...}`
/// or `{"type": "bulleted-list", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// A paragraph of inline text runs.
    Paragraph {
        /// Text runs in reading order
        children: Vec<TextRun>,
    },

    /// A bulleted list of items. Items hold runs only; lists do not nest.
    BulletedList {
        /// List items in reading order
        children: Vec<ListItem>,
    },
}

impl Node {
    /// Create a paragraph with a single plain text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            children: vec![TextRun::new(text)],
        }
    }

    /// Create an empty paragraph (one empty run).
    pub fn empty_paragraph() -> Self {
        Node::paragraph("")
    }

    /// Create a bulleted list from plain text items.
    pub fn bulleted_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::BulletedList {
            children: items.into_iter().map(ListItem::with_text).collect(),
        }
    }

    /// Get the concatenated plain text of this node's runs.
    ///
    /// List items are joined with newlines; marks are ignored.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Paragraph { children } => concat_runs(children),
            Node::BulletedList { children } => children
                .iter()
                .map(ListItem::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A single item of a bulleted list.
///
/// Wire encoding carries the tag `{"type": "list-item", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "list-item")]
pub struct ListItem {
    /// Text runs in reading order
    pub children: Vec<TextRun>,
}

impl ListItem {
    /// Create a list item with a single plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            children: vec![TextRun::new(text)],
        }
    }

    /// Get the concatenated plain text of the item, ignoring marks.
    pub fn plain_text(&self) -> String {
        concat_runs(&self.children)
    }
}

/// A run of inline text with optional marks.
///
/// Absent marks mean `false`; `false` marks are omitted on the wire so
/// that serialization round-trips the persisted form exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold mark
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic mark
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Underline mark
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
}

impl TextRun {
    /// Create a run with no marks.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    /// Check if this run carries any mark.
    pub fn has_marks(&self) -> bool {
        self.bold || self.italic || self.underline
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Concatenate run text, ignoring marks.
pub(crate) fn concat_runs(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let node = Node::Paragraph {
            children: vec![
                TextRun::new("Hello "),
                TextRun::bold("world"),
                TextRun::new("!"),
            ],
        };
        assert_eq!(node.plain_text(), "Hello world!");
    }

    #[test]
    fn test_list_plain_text() {
        let node = Node::bulleted_list(["one", "two"]);
        assert_eq!(node.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_run_marks() {
        assert!(!TextRun::new("plain").has_marks());
        assert!(TextRun::bold("b").has_marks());
        assert!(TextRun::italic("i").has_marks());
    }

    #[test]
    fn test_wire_tags() {
        let json = serde_json::to_string(&Node::paragraph("hi")).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));

        let json = serde_json::to_string(&Node::bulleted_list(["x"])).unwrap();
        assert!(json.contains("\"type\":\"bulleted-list\""));
        assert!(json.contains("\"type\":\"list-item\""));
    }

    #[test]
    fn test_false_marks_omitted() {
        let json = serde_json::to_string(&TextRun::new("plain")).unwrap();
        assert_eq!(json, "{\"text\":\"plain\"}");

        let json = serde_json::to_string(&TextRun::bold("b")).unwrap();
        assert_eq!(json, "{\"text\":\"b\",\"bold\":true}");
    }
}
