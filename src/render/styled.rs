//! Styled line extraction for read-only preview rendering.

use crate::model::{Document, Node, TextRun};

/// One flattened line of a document: a paragraph or a single list item.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Whether this line came from a bulleted list item
    pub bullet: bool,

    /// Styled runs in reading order; marks default to unmarked
    pub runs: Vec<TextRun>,
}

impl Line {
    /// Get the concatenated plain text of the line, ignoring marks.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Flatten a document into styled lines, preserving marks.
///
/// Each paragraph becomes one line; each list item becomes one line
/// flagged as a bullet. Document order is preserved exactly.
pub fn flatten_to_lines(doc: &Document) -> Vec<Line> {
    let mut lines = Vec::new();
    for node in &doc.nodes {
        match node {
            Node::Paragraph { children } => lines.push(Line {
                bullet: false,
                runs: children.clone(),
            }),
            Node::BulletedList { children } => {
                for item in children {
                    lines.push(Line {
                        bullet: true,
                        runs: item.children.clone(),
                    });
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListItem;

    #[test]
    fn test_lines_preserve_marks_and_order() {
        let doc = Document::from_nodes(vec![
            Node::Paragraph {
                children: vec![TextRun::new("plain "), TextRun::bold("bold")],
            },
            Node::BulletedList {
                children: vec![
                    ListItem {
                        children: vec![TextRun::italic("first")],
                    },
                    ListItem::with_text("second"),
                ],
            },
        ]);

        let lines = flatten_to_lines(&doc);
        assert_eq!(lines.len(), 3);
        assert!(!lines[0].bullet);
        assert!(lines[0].runs[1].bold);
        assert!(lines[1].bullet);
        assert!(lines[1].runs[0].italic);
        assert_eq!(lines[2].plain_text(), "second");
    }

    #[test]
    fn test_empty_document_yields_one_blank_line() {
        let lines = flatten_to_lines(&Document::empty());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain_text(), "");
    }
}
