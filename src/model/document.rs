//! Document-level types.

use super::ContentBlock;
use serde::{Deserialize, Serialize};

/// A structured article ready for infographic rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Article title
    pub title: String,

    /// Subtitle shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Header metadata (author, date, read time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Ordered sections of content blocks
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new document with a title and no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            meta: None,
            sections: Vec::new(),
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of content blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.content.len()).sum()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Header metadata for a document.
///
/// All fields are optional; absent fields render as absent, not as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Article author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date, as supplied (no fixed format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Estimated reading time, e.g. "5 min"
    #[serde(
        default,
        rename = "readTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_time: Option<String>,
}

impl Meta {
    /// Check if every field is absent.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.date.is_none() && self.read_time.is_none()
    }
}

/// A titled, ordered run of content blocks.
///
/// Sections are numbered by position in the document, never by a stored
/// field; see [`section_ordinal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,

    /// Content blocks, rendered top to bottom
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: ContentBlock) {
        self.content.push(block);
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        parts.extend(self.content.iter().filter_map(|b| b.plain_text()));
        parts.retain(|p| !p.is_empty());
        parts.join("\n\n")
    }
}

/// Compute the 1-based, zero-padded ordinal label for a section position.
///
/// `index` is the section's 0-based position in the document.
pub fn section_ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentBlock;

    #[test]
    fn test_document_new() {
        let doc = Document::new("Title");
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_block_count() {
        let mut doc = Document::new("Title");
        let mut section = Section::new("One");
        section.add_block(ContentBlock::paragraph("a"));
        section.add_block(ContentBlock::paragraph("b"));
        doc.add_section(section);
        doc.add_section(Section::new("Two"));

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_section_ordinal() {
        assert_eq!(section_ordinal(0), "01");
        assert_eq!(section_ordinal(8), "09");
        assert_eq!(section_ordinal(9), "10");
        assert_eq!(section_ordinal(99), "100");
    }

    #[test]
    fn test_meta_read_time_wire_name() {
        let meta = Meta {
            author: None,
            date: None,
            read_time: Some("5 min".to_string()),
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"readTime\""));
        assert!(!json.contains("read_time"));
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new("Title");
        let mut section = Section::new("Intro");
        section.add_block(ContentBlock::paragraph("Hello **world**"));
        doc.add_section(section);

        let text = doc.plain_text();
        assert!(text.contains("Intro"));
        assert!(text.contains("Hello"));
    }
}
