//! Integration tests for schema validation and renderer dispatch.

use artigram::render::{HtmlRenderer, RenderOptions};
use artigram::{parse_str, Error};

/// Minimal valid JSON for every tag in the closed set.
fn sample_blocks() -> Vec<(&'static str, &'static str)> {
    vec![
        ("paragraph", r#"{"type":"paragraph","text":"body"}"#),
        ("list", r#"{"type":"list","items":["one","two"]}"#),
        ("quote", r#"{"type":"quote","text":"said"}"#),
        ("callout", r#"{"type":"callout","text":"note"}"#),
        (
            "grid",
            r#"{"type":"grid","columns":2,"items":[{"title":"t","description":"d"}]}"#,
        ),
        (
            "image",
            r#"{"type":"image","src":"https://example.com/i.png","alt":"alt"}"#,
        ),
        (
            "stat",
            r#"{"type":"stat","items":[{"label":"users","value":"10k","trend":"up"}]}"#,
        ),
        ("tags", r#"{"type":"tags","items":["a"]}"#),
        ("timeline", r#"{"type":"timeline","items":[{"title":"t"}]}"#),
        (
            "comparison",
            r#"{"type":"comparison","columns":["A","B"],"rows":[{"label":"r","values":["1","2"]}]}"#,
        ),
        (
            "table",
            r#"{"type":"table","headers":["H"],"rows":[["v"]]}"#,
        ),
        ("code", r#"{"type":"code","code":"let x = 1;"}"#),
        (
            "accordion",
            r#"{"type":"accordion","items":[{"question":"q","answer":"a"}]}"#,
        ),
        (
            "steps",
            r#"{"type":"steps","items":[{"step":1,"title":"t","description":"d"}]}"#,
        ),
        (
            "progress",
            r#"{"type":"progress","items":[{"label":"l","value":40}]}"#,
        ),
        ("highlight", r#"{"type":"highlight","text":"hot"}"#),
        (
            "definition",
            r#"{"type":"definition","items":[{"term":"t","definition":"d"}]}"#,
        ),
        (
            "proscons",
            r#"{"type":"proscons","pros":["p"],"cons":["c"]}"#,
        ),
        (
            "video",
            r#"{"type":"video","src":"https://example.com/v","platform":"youtube"}"#,
        ),
        ("divider", r#"{"type":"divider"}"#),
        (
            "linkcard",
            r#"{"type":"linkcard","url":"https://example.com","title":"t"}"#,
        ),
        (
            "rating",
            r#"{"type":"rating","items":[{"label":"l","score":3}]}"#,
        ),
    ]
}

fn document_json(blocks: &[(&str, &str)]) -> String {
    let content: Vec<&str> = blocks.iter().map(|(_, json)| *json).collect();
    format!(
        r#"{{"title":"All blocks","sections":[{{"title":"Everything","content":[{}]}}]}}"#,
        content.join(",")
    )
}

#[test]
fn dispatch_is_total_over_the_closed_set() {
    let samples = sample_blocks();
    assert_eq!(samples.len(), 22, "one sample per tag");

    let doc = parse_str(&document_json(&samples)).unwrap();
    let blocks = &doc.sections[0].content;
    assert_eq!(blocks.len(), samples.len());

    let renderer = HtmlRenderer::new(RenderOptions::default());
    for (block, (tag, _)) in blocks.iter().zip(&samples) {
        assert_eq!(block.tag(), Some(*tag), "tag survived the parse");
        let mut out = String::new();
        renderer.render_block(&mut out, block);
        assert!(!out.is_empty(), "tag {tag} must render a node");
    }
}

#[test]
fn unknown_tag_renders_empty_without_error() {
    let json = r#"{"title":"T","sections":[{"title":"S","content":[
        {"type":"carousel","slides":["a","b"]}
    ]}]}"#;
    let doc = parse_str(json).unwrap();
    let block = &doc.sections[0].content[0];
    assert!(block.is_unknown());

    let renderer = HtmlRenderer::new(RenderOptions::default());
    let mut out = String::new();
    renderer.render_block(&mut out, block);
    assert!(out.is_empty());
}

#[test]
fn one_section_node_per_input_section_in_order() {
    let json = r#"{"title":"T","sections":[
        {"title":"Alpha","content":[]},
        {"title":"Beta","content":[]},
        {"title":"Gamma","content":[]}
    ]}"#;
    let doc = parse_str(json).unwrap();
    let html = artigram::to_html(&doc, &RenderOptions::default()).unwrap();

    assert_eq!(html.matches("<section class=\"section\">").count(), 3);
    let alpha = html.find("Alpha").unwrap();
    let beta = html.find("Beta").unwrap();
    let gamma = html.find("Gamma").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn empty_sections_array_is_a_valid_document() {
    let doc = parse_str(r#"{"title":"T","sections":[]}"#).unwrap();
    let html = artigram::to_html(&doc, &RenderOptions::default()).unwrap();
    assert!(html.contains("<article class=\"infographic\">"));
    assert_eq!(html.matches("<section").count(), 0);
}

#[test]
fn missing_sections_is_rejected_with_schema_error() {
    for json in [r#"{}"#, r#"{"sections":null}"#, r#"{"sections":{}}"#] {
        match parse_str(json) {
            Err(Error::Schema(msg)) => assert_eq!(msg, "sections array is missing"),
            other => panic!("expected schema error for {json}, got {other:?}"),
        }
    }
}

#[test]
fn comparison_renders_header_plus_one_cell_per_column() {
    let json = r#"{"title":"T","sections":[{"title":"S","content":[
        {"type":"comparison","columns":["A","B","C"],"rows":[
            {"label":"r1","values":["1","2","3"]},
            {"label":"r2","values":["1"]}
        ]}
    ]}]}"#;
    let doc = parse_str(json).unwrap();
    let html = artigram::to_html(&doc, &RenderOptions::default()).unwrap();

    // Each body row: one <th> label and exactly three <td> cells.
    assert_eq!(html.matches("<td>").count(), 6);
}

#[test]
fn full_document_renders_text_and_html() {
    let json = document_json(&sample_blocks());
    let doc = parse_str(&json).unwrap();

    let html = artigram::to_html(&doc, &RenderOptions::new().standalone(true)).unwrap();
    assert!(html.contains("<title>All blocks</title>"));
    assert!(html.contains("<span class=\"section-ordinal\">01</span>"));

    let text = artigram::to_text(&doc, &RenderOptions::default()).unwrap();
    assert!(text.contains("01 Everything"));
    assert!(text.contains("let x = 1;"));
}
