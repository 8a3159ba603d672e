//! Inline emphasis parsing.
//!
//! Paragraph and list-item text supports one piece of inline markup: a
//! `**text**` span renders as emphasized. Splitting is a single non-greedy
//! regex pass; whatever that pass yields on adjacent or nested markers is
//! the contract. Unterminated `**` stays literal.

use regex::Regex;

/// One run of paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Unemphasized text
    Plain(&'a str),
    /// Text inside a `**…**` pair
    Strong(&'a str),
}

impl<'a> Span<'a> {
    /// The text of the span, regardless of emphasis.
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(t) | Span::Strong(t) => t,
        }
    }

    /// Check if this span is emphasized.
    pub fn is_strong(&self) -> bool {
        matches!(self, Span::Strong(_))
    }
}

/// Splitter for `**bold**` emphasis spans.
pub struct InlineParser {
    bold: Regex,
}

impl InlineParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
        }
    }

    /// Split `text` into alternating plain and emphasized spans.
    ///
    /// Empty plain runs between adjacent matches are dropped; text with no
    /// complete `**…**` pair comes back as a single plain span.
    pub fn parse<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let mut last = 0;

        for caps in self.bold.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap();
            if whole.start() > last {
                spans.push(Span::Plain(&text[last..whole.start()]));
            }
            spans.push(Span::Strong(inner.as_str()));
            last = whole.end();
        }

        if last < text.len() {
            spans.push(Span::Plain(&text[last..]));
        }
        if spans.is_empty() && !text.is_empty() {
            spans.push(Span::Plain(text));
        }
        spans
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` into spans with a one-shot parser.
pub fn parse_spans(text: &str) -> Vec<Span<'_>> {
    InlineParser::new().parse(text)
}

/// Drop the `**` markers, keeping the text of every span.
pub fn strip_emphasis(text: &str) -> String {
    parse_spans(text).iter().map(|s| s.text()).collect()
}
