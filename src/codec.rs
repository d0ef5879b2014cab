//! Codec for the persisted rich-text field encoding.
//!
//! Rich-text fields (summary, descriptions) are stored as a JSON string
//! holding the document's node array. Stored values predate the current
//! editor in some resumes: fields may hold raw plain text, truncated
//! JSON, or nothing at all. [`parse`] therefore never fails — every
//! malformed input degrades to a valid document, either by wrapping the
//! raw text in a paragraph or by falling back to the canonical empty
//! document. [`serialize`] is the exact inverse of [`parse`] for any
//! document [`parse`] can produce.

use serde_json::Value;

use crate::model::{Document, ListItem, Node, TextRun};

/// The canonical empty document in persisted form.
pub const EMPTY_DOCUMENT_JSON: &str = r#"[{"type":"paragraph","children":[{"text":""}]}]"#;

/// Parse a persisted field value into a document.
///
/// Total over its input: `None`, the empty string, malformed JSON, and
/// wrong-shaped JSON all recover to a valid document.
///
/// - `None` / `""` yield the canonical empty document.
/// - A JSON array whose every element has a recognized block `type` and
///   a `children` array decodes structurally; malformed entries *inside*
///   a recognized block are skipped silently.
/// - Input that looks like abandoned structural data (first character
///   `{` or `[` but unusable) recovers as the canonical empty document.
/// - Any other input is treated as legacy plain text and wrapped
///   verbatim in a single paragraph, so nothing a user typed before
///   rich-text support existed is ever dropped.
pub fn parse(input: Option<&str>) -> Document {
    let Some(raw) = input else {
        return Document::empty();
    };
    if raw.is_empty() {
        return Document::empty();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) if items.iter().all(is_recognized_block) => decode_blocks(&items),
        _ => recover(raw),
    }
}

/// Serialize a document to its persisted string form.
///
/// Structure-preserving: no run merging or other normalization is
/// applied, so `parse(serialize(doc)) == doc` for any `doc` produced by
/// [`parse`].
pub fn serialize(doc: &Document) -> String {
    match serde_json::to_string(doc) {
        Ok(json) => json,
        Err(err) => {
            // Unreachable for this model shape; degrade rather than fail.
            log::error!("document serialization failed: {err}");
            EMPTY_DOCUMENT_JSON.to_string()
        }
    }
}

/// Recover unusable input as a document.
fn recover(raw: &str) -> Document {
    match raw.trim_start().chars().next() {
        Some('{') | Some('[') => {
            log::warn!("discarding malformed rich-text data ({} bytes)", raw.len());
            Document::empty()
        }
        _ => Document::from_plain_text(raw),
    }
}

/// Check that a top-level element carries a recognized block `type` and
/// a `children` sequence. Nested run fields are not validated here.
fn is_recognized_block(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let recognized = matches!(
        obj.get("type").and_then(Value::as_str),
        Some("paragraph") | Some("bulleted-list")
    );
    recognized && obj.get("children").is_some_and(Value::is_array)
}

fn decode_blocks(items: &[Value]) -> Document {
    let nodes = items.iter().filter_map(decode_block).collect();
    Document::from_nodes(nodes)
}

fn decode_block(value: &Value) -> Option<Node> {
    let obj = value.as_object()?;
    let children = obj.get("children")?.as_array()?;
    match obj.get("type")?.as_str()? {
        "paragraph" => Some(Node::Paragraph {
            children: decode_runs(children),
        }),
        "bulleted-list" => Some(Node::BulletedList {
            children: decode_items(children),
        }),
        _ => None,
    }
}

/// Decode list items, skipping entries that are not item-shaped.
fn decode_items(values: &[Value]) -> Vec<ListItem> {
    values
        .iter()
        .filter_map(|value| {
            let obj = value.as_object()?;
            if let Some(tag) = obj.get("type").and_then(Value::as_str) {
                if tag != "list-item" {
                    log::debug!("skipping foreign node '{tag}' inside bulleted list");
                    return None;
                }
            }
            let children = obj.get("children")?.as_array()?;
            Some(ListItem {
                children: decode_runs(children),
            })
        })
        .collect()
}

/// Decode text runs, skipping entries without a string `text` field.
/// Mark fields are read leniently: anything but `true` means unmarked.
fn decode_runs(values: &[Value]) -> Vec<TextRun> {
    values
        .iter()
        .filter_map(|value| {
            let obj = value.as_object()?;
            let text = obj.get("text")?.as_str()?;
            Some(TextRun {
                text: text.to_string(),
                bold: mark(obj.get("bold")),
                italic: mark(obj.get("italic")),
                underline: mark(obj.get("underline")),
            })
        })
        .collect()
}

fn mark(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

/// Serde adapter for aggregate fields whose `Document` value is
/// persisted as a JSON string. Reading applies the tolerant [`parse`].
pub mod doc_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::model::Document;

    pub fn serialize<S>(doc: &Document, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::serialize(doc))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(super::parse(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none_and_empty() {
        assert_eq!(parse(None), Document::empty());
        assert_eq!(parse(Some("")), Document::empty());
    }

    #[test]
    fn test_parse_plain_text_fallback() {
        let doc = parse(Some("hello world"));
        assert_eq!(doc, Document::from_plain_text("hello world"));
    }

    #[test]
    fn test_parse_malformed_json_fallback() {
        assert_eq!(parse(Some("{not valid json")), Document::empty());
        assert_eq!(parse(Some("[1, 2,")), Document::empty());
    }

    #[test]
    fn test_parse_wrong_shape_array() {
        // Valid JSON, but not a node array: recovered as structural junk.
        assert_eq!(parse(Some("[1, 2, 3]")), Document::empty());
        assert_eq!(parse(Some(r#"{"type":"paragraph"}"#)), Document::empty());
    }

    #[test]
    fn test_parse_well_formed() {
        let input = r#"[
            {"type":"paragraph","children":[{"text":"A","bold":true}]},
            {"type":"bulleted-list","children":[
                {"type":"list-item","children":[{"text":"B"}]}
            ]}
        ]"#;
        let doc = parse(Some(input));
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.nodes[0],
            Node::Paragraph {
                children: vec![TextRun::bold("A")],
            }
        );
        assert_eq!(doc.nodes[1], Node::bulleted_list(["B"]));
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        // A list entry without children and a run without text vanish;
        // the surrounding structure survives.
        let input = r#"[
            {"type":"bulleted-list","children":[
                {"type":"list-item"},
                {"type":"list-item","children":[{"text":"kept"},{"bold":true}]}
            ]}
        ]"#;
        let doc = parse(Some(input));
        assert_eq!(doc.nodes, vec![Node::bulleted_list(["kept"])]);
    }

    #[test]
    fn test_parse_lenient_marks() {
        let input = r#"[{"type":"paragraph","children":[{"text":"x","bold":"yes"}]}]"#;
        let doc = parse(Some(input));
        assert_eq!(doc.nodes[0], Node::paragraph("x"));
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            EMPTY_DOCUMENT_JSON.to_string(),
            serialize(&Document::from_plain_text("hello")),
            serialize(&Document::from_nodes(vec![
                Node::Paragraph {
                    children: vec![TextRun::bold("A"), TextRun::italic("B")],
                },
                Node::bulleted_list(["x", "y", "z"]),
            ])),
        ];
        for input in inputs {
            let doc = parse(Some(&input));
            assert_eq!(parse(Some(&serialize(&doc))), doc);
        }
    }

    #[test]
    fn test_serialize_empty_is_canonical() {
        assert_eq!(serialize(&Document::empty()), EMPTY_DOCUMENT_JSON);
    }
}
