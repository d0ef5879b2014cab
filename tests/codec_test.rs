//! Integration tests for the rich-text codec.

use cvforge::{parse_document, serialize_document, Document, ListItem, Node, TextRun};

#[test]
fn test_round_trip_law() {
    // Every document producible by parse must survive a full cycle.
    let inputs = [
        // canonical empty
        r#"[{"type":"paragraph","children":[{"text":""}]}]"#.to_string(),
        // plain-text wrap
        "typed before rich text existed".to_string(),
        // marked runs and a list
        serialize_document(&Document::from_nodes(vec![
            Node::Paragraph {
                children: vec![
                    TextRun::new("Led the "),
                    TextRun::bold("platform team"),
                    TextRun {
                        text: " for two years".to_string(),
                        underline: true,
                        ..Default::default()
                    },
                ],
            },
            Node::BulletedList {
                children: vec![
                    ListItem::with_text("Cut build times by half"),
                    ListItem {
                        children: vec![TextRun::italic("Mentored four engineers")],
                    },
                ],
            },
        ])),
    ];

    for input in inputs {
        let doc = parse_document(Some(&input));
        let round_tripped = parse_document(Some(&serialize_document(&doc)));
        assert_eq!(round_tripped, doc, "round-trip failed for {input:?}");
    }
}

#[test]
fn test_plain_text_fallback() {
    let doc = parse_document(Some("hello world"));
    assert_eq!(
        doc.nodes,
        vec![Node::Paragraph {
            children: vec![TextRun::new("hello world")],
        }]
    );
}

#[test]
fn test_malformed_input_fallback() {
    assert_eq!(parse_document(Some("{not valid json")), Document::empty());
}

#[test]
fn test_null_and_empty_fallback() {
    assert_eq!(parse_document(None), Document::empty());
    assert_eq!(parse_document(Some("")), Document::empty());
}

#[test]
fn test_serialization_preserves_adjacent_identical_runs() {
    // No normalization: two identical-mark runs stay two runs.
    let doc = Document::from_nodes(vec![Node::Paragraph {
        children: vec![TextRun::bold("a"), TextRun::bold("b")],
    }]);
    let round_tripped = parse_document(Some(&serialize_document(&doc)));
    assert_eq!(round_tripped.nodes, doc.nodes);
    match &round_tripped.nodes[0] {
        Node::Paragraph { children } => assert_eq!(children.len(), 2),
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_top_level_falls_back_whole() {
    // One bad element poisons the array: the input is not node-shaped.
    let input = r#"[{"type":"paragraph","children":[{"text":"ok"}]},{"type":"table"}]"#;
    assert_eq!(parse_document(Some(input)), Document::empty());
}

#[test]
fn test_malformed_children_skipped_inside_recognized_blocks() {
    let input = r#"[
        {"type":"paragraph","children":[{"text":"kept"},42,{"nope":true}]},
        {"type":"bulleted-list","children":["junk",{"type":"list-item","children":[{"text":"item"}]}]}
    ]"#;
    let doc = parse_document(Some(input));
    assert_eq!(
        doc.nodes,
        vec![Node::paragraph("kept"), Node::bulleted_list(["item"])]
    );
}
