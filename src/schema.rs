//! Permissive schema validation.
//!
//! The only shape enforced at the boundary is that the top-level value is an
//! object whose `sections` field holds an array. Everything deeper is taken
//! as it comes: a missing optional field renders as absent, and a malformed
//! block is logged and dropped rather than failing the whole document.

use crate::error::{Error, Result};
use crate::model::{ContentBlock, Document, Meta, Section};
use serde_json::Value;

const MISSING_SECTIONS: &str = "sections array is missing";

/// Parse a JSON string into a [`Document`].
///
/// Syntactically invalid JSON yields [`Error::Json`]; a value without a
/// `sections` array yields [`Error::Schema`].
pub fn parse_str(input: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(input)?;
    parse_value(&value)
}

/// Parse an already-decoded JSON value into a [`Document`].
pub fn parse_value(value: &Value) -> Result<Document> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::Schema(MISSING_SECTIONS.to_string()))?;

    let sections = obj
        .get("sections")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Schema(MISSING_SECTIONS.to_string()))?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let subtitle = obj
        .get("subtitle")
        .and_then(Value::as_str)
        .map(str::to_string);
    let meta = obj
        .get("meta")
        .and_then(|m| serde_json::from_value::<Meta>(m.clone()).ok());

    let sections = sections.iter().map(parse_section).collect();

    Ok(Document {
        title,
        subtitle,
        meta,
        sections,
    })
}

fn parse_section(value: &Value) -> Section {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let content = value
        .get("content")
        .and_then(Value::as_array)
        .map(|blocks| {
            blocks
                .iter()
                .filter_map(|b| parse_block(b, &title))
                .collect()
        })
        .unwrap_or_default();

    Section { title, content }
}

/// Parse one block value, skip-and-log on malformed shape.
fn parse_block(value: &Value, section: &str) -> Option<ContentBlock> {
    let value = normalize_comparison_rows(value);
    match serde_json::from_value::<ContentBlock>(value) {
        Ok(block) => Some(block),
        Err(err) => {
            log::warn!("dropping malformed block in section {:?}: {}", section, err);
            None
        }
    }
}

/// Repair comparison rows emitted in the table shape.
///
/// Generator models routinely confuse the two row formats: `comparison`
/// rows must be `{label, values}` objects, but sometimes arrive as bare
/// arrays (the `table` shape). An array row becomes `{label: first,
/// values: rest}`; anything else non-object becomes a label with no values.
fn normalize_comparison_rows(value: &Value) -> Value {
    let mut value = value.clone();

    let is_comparison = value.get("type").and_then(Value::as_str) == Some("comparison");
    if !is_comparison {
        return value;
    }

    if let Some(rows) = value.get_mut("rows").and_then(Value::as_array_mut) {
        for row in rows.iter_mut() {
            let replacement = match &*row {
                Value::Array(cells) if !cells.is_empty() => {
                    let label = stringify_cell(&cells[0]);
                    let values: Vec<Value> = cells[1..]
                        .iter()
                        .map(|c| Value::String(stringify_cell(c)))
                        .collect();
                    serde_json::json!({ "label": label, "values": values })
                }
                Value::Object(_) => continue,
                other => {
                    serde_json::json!({ "label": stringify_cell(other), "values": [] })
                }
            };
            *row = replacement;
        }
    }
    value
}

fn stringify_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComparisonRow;

    #[test]
    fn test_minimal_document() {
        let doc = parse_str(r#"{"title":"T","sections":[]}"#).unwrap();
        assert_eq!(doc.title, "T");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_missing_sections_rejected() {
        for input in [
            r#"{"title":"T"}"#,
            r#"{"sections":null}"#,
            r#"{"sections":"not an array"}"#,
            r#"{"sections":42}"#,
            r#"[1,2,3]"#,
            r#""just a string""#,
        ] {
            let err = parse_str(input).unwrap_err();
            match err {
                Error::Schema(msg) => assert_eq!(msg, "sections array is missing"),
                other => panic!("expected schema error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_json_is_a_json_error() {
        let err = parse_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_sections_preserved_in_order() {
        let doc = parse_str(
            r#"{"sections":[
                {"title":"One","content":[{"type":"paragraph","text":"a"}]},
                {"title":"Two","content":[]},
                {"title":"Three"}
            ]}"#,
        )
        .unwrap();
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two", "Three"]);
        assert_eq!(doc.sections[0].content.len(), 1);
        assert!(doc.sections[2].content.is_empty());
    }

    #[test]
    fn test_missing_title_is_permitted() {
        let doc = parse_str(r#"{"sections":[]}"#).unwrap();
        assert_eq!(doc.title, "");
        assert!(doc.meta.is_none());
    }

    #[test]
    fn test_malformed_block_is_dropped() {
        // `items` must be an array of strings; the bad block is skipped and
        // the good one survives.
        let doc = parse_str(
            r#"{"sections":[{"title":"S","content":[
                {"type":"list","items":"oops"},
                {"type":"paragraph","text":"kept"}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.sections[0].content.len(), 1);
        assert_eq!(doc.sections[0].content[0].tag(), Some("paragraph"));
    }

    #[test]
    fn test_unknown_tag_becomes_unknown_block() {
        let doc = parse_str(
            r#"{"sections":[{"title":"S","content":[{"type":"sparkline","points":[1,2]}]}]}"#,
        )
        .unwrap();
        assert!(doc.sections[0].content[0].is_unknown());
    }

    #[test]
    fn test_comparison_rows_normalized_from_arrays() {
        let doc = parse_str(
            r#"{"sections":[{"title":"S","content":[
                {"type":"comparison","columns":["A","B"],"rows":[
                    ["Price","Free","Paid"],
                    {"label":"Speed","values":["Fast","Slow"]},
                    "orphan"
                ]}
            ]}]}"#,
        )
        .unwrap();

        let ContentBlock::Comparison { rows, .. } = &doc.sections[0].content[0] else {
            panic!("expected comparison block");
        };
        let expect = |row: &ComparisonRow, label: &str, values: &[&str]| {
            assert_eq!(row.label, label);
            assert_eq!(row.values, values);
        };
        expect(&rows[0], "Price", &["Free", "Paid"]);
        expect(&rows[1], "Speed", &["Fast", "Slow"]);
        expect(&rows[2], "orphan", &[]);
    }

    #[test]
    fn test_strict_round_trip_still_works() {
        let json = r#"{"title":"T","subtitle":"S","meta":{"author":"A","readTime":"3 min"},
            "sections":[{"title":"One","content":[{"type":"tags","items":["x","y"]}]}]}"#;
        let strict: Document = serde_json::from_str(json).unwrap();
        let permissive = parse_str(json).unwrap();
        assert_eq!(strict.title, permissive.title);
        assert_eq!(strict.sections.len(), permissive.sections.len());
        assert_eq!(
            strict.meta.as_ref().unwrap().read_time,
            permissive.meta.as_ref().unwrap().read_time
        );
    }
}
