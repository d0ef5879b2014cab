//! Plain-text flattening.

use crate::model::{Document, Node};

/// Marker prepended to flattened list-item lines.
pub const BULLET_PREFIX: &str = "\u{2022} ";

/// Flatten a document to plain text, ignoring marks.
///
/// Paragraphs become one line each; every list item becomes one line
/// prefixed with `"• "`. Lines are joined with a single newline in
/// document order.
pub fn flatten_to_text(doc: &Document) -> String {
    let mut lines = Vec::new();
    for node in &doc.nodes {
        match node {
            Node::Paragraph { .. } => lines.push(node.plain_text()),
            Node::BulletedList { children } => {
                for item in children {
                    lines.push(format!("{BULLET_PREFIX}{}", item.plain_text()));
                }
            }
        }
    }
    lines.join("\n")
}
