//! # artigram
//!
//! Structured-article-to-infographic rendering for Rust.
//!
//! This library turns a structured article document (title, metadata, and
//! ordered sections of typed content blocks) into a styled HTML page, and
//! ships the client for the conversion service that produces such
//! documents from source URLs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use artigram::{parse_str, render, RenderOptions};
//!
//! fn main() -> artigram::Result<()> {
//!     let json = std::fs::read_to_string("article.json")?;
//!     let doc = parse_str(&json)?;
//!
//!     let options = RenderOptions::new().standalone(true);
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Closed block schema**: 21 typed content blocks behind one tagged
//!   union; unknown tags degrade to omission instead of failing the page
//! - **Permissive validation**: only the `sections` array is enforced;
//!   malformed blocks are logged and skipped
//! - **Total renderer dispatch**: HTML and plain-text output from the same
//!   exhaustive match
//! - **Task polling client** (`client` feature): submit a URL, poll on a
//!   fixed schedule, resolve to a document with supersession discipline

pub mod authoring;
pub mod error;
pub mod model;
pub mod render;
pub mod schema;
pub mod task;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ContentBlock, Document, Meta, Section};
pub use render::{to_html, to_text, RenderOptions};
pub use schema::{parse_str, parse_value};
pub use task::{CreateTaskRequest, Task, TaskStatus};

#[cfg(feature = "client")]
pub use task::{PollOptions, TaskClient};

/// Parse a JSON string and render it to HTML in one step.
pub fn html_from_str(input: &str, options: &RenderOptions) -> Result<String> {
    let doc = schema::parse_str(input)?;
    render::to_html(&doc, options)
}

/// Parse a JSON string and render it to plain text in one step.
pub fn text_from_str(input: &str, options: &RenderOptions) -> Result<String> {
    let doc = schema::parse_str(input)?;
    render::to_text(&doc, options)
}

/// Builder for parsing and rendering article documents.
///
/// # Example
///
/// ```no_run
/// use artigram::Artigram;
///
/// let html = Artigram::new()
///     .standalone(true)
///     .with_stylesheet("theme.css")
///     .parse_str(r#"{"title":"T","sections":[]}"#)?
///     .to_html()?;
/// # Ok::<(), artigram::Error>(())
/// ```
pub struct Artigram {
    render_options: RenderOptions,
}

impl Artigram {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Wrap output in a complete HTML page.
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.render_options = self.render_options.standalone(standalone);
        self
    }

    /// Link a stylesheet from standalone output.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_stylesheet(href);
        self
    }

    /// Enable or disable section ordinal labels.
    pub fn with_section_numbers(mut self, on: bool) -> Self {
        self.render_options = self.render_options.with_section_numbers(on);
        self
    }

    /// Parse a JSON string and return a renderable result.
    pub fn parse_str(self, input: &str) -> Result<ArtigramResult> {
        let document = schema::parse_str(input)?;
        Ok(ArtigramResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Wrap an already-parsed document.
    pub fn with_document(self, document: Document) -> ArtigramResult {
        ArtigramResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Artigram {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed document paired with render options.
pub struct ArtigramResult {
    /// The parsed document
    pub document: Document,
    render_options: RenderOptions,
}

impl ArtigramResult {
    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let result = Artigram::new()
            .standalone(true)
            .parse_str(r#"{"title":"Hello","sections":[{"title":"S","content":[{"type":"paragraph","text":"p"}]}]}"#)
            .unwrap();

        assert_eq!(result.document().title, "Hello");
        let html = result.to_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>p</p>"));
    }

    #[test]
    fn test_html_from_str_schema_error() {
        let err = html_from_str(r#"{"title":"no sections"}"#, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_text_from_str() {
        let text = text_from_str(
            r#"{"title":"T","sections":[{"title":"S","content":[{"type":"tags","items":["a","b"]}]}]}"#,
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(text.contains("#a #b"));
    }
}
