//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Node, TextRun};

/// A rich-text document: an ordered sequence of block nodes.
///
/// Serializes transparently as the bare node array, which is the shape
/// persisted inside resume fields. A document is never empty in persisted
/// form; the canonical empty document is a single paragraph holding one
/// empty run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Block nodes in reading order
    pub nodes: Vec<Node>,
}

impl Document {
    /// Create the canonical empty document.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::empty_paragraph()],
        }
    }

    /// Create a document from nodes.
    ///
    /// An empty node sequence degrades to the canonical empty document.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        if nodes.is_empty() {
            Self::empty()
        } else {
            Self { nodes }
        }
    }

    /// Wrap plain text as a single-paragraph document.
    pub fn from_plain_text(text: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::Paragraph {
                children: vec![TextRun::new(text)],
            }],
        }
    }

    /// Check if the document carries no visible text at all.
    pub fn is_blank(&self) -> bool {
        self.nodes
            .iter()
            .all(|node| node.plain_text().trim().is_empty())
    }

    /// Number of block nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the node sequence is empty.
    ///
    /// Only seen on hand-built values; `empty()` and the codec always
    /// produce at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_shape() {
        let doc = Document::empty();
        assert_eq!(doc.len(), 1);
        assert!(doc.is_blank());
        assert_eq!(
            doc.nodes[0],
            Node::Paragraph {
                children: vec![TextRun::new("")],
            }
        );
    }

    #[test]
    fn test_from_plain_text() {
        let doc = Document::from_plain_text("hello");
        assert!(!doc.is_blank());
        assert_eq!(doc.nodes[0].plain_text(), "hello");
    }

    #[test]
    fn test_from_nodes_never_empty() {
        let doc = Document::from_nodes(Vec::new());
        assert_eq!(doc, Document::empty());
    }

    #[test]
    fn test_transparent_serialization() {
        let doc = Document::from_plain_text("x");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }
}
