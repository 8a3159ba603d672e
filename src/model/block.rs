//! Content-block types.
//!
//! A [`ContentBlock`] is one typed unit of article content. The set of
//! variants is closed; tags outside it deserialize to
//! [`ContentBlock::Unknown`] and render as nothing, so documents written
//! against a newer schema degrade to omission instead of failing outright.

use super::inline::strip_emphasis;
use serde::{Deserialize, Serialize};

/// A single typed content block.
///
/// The `type` field on the wire selects the variant; exactly one variant is
/// active per block and only that variant's fields are meaningful. Every
/// variant also carries an optional `id` for anchoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A paragraph of text; supports `**bold**` emphasis spans.
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Paragraph text
        text: String,
    },

    /// A list of items, optionally titled.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// List items; each supports `**bold**` spans
        items: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Marker style; bullet when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ListStyle>,
    },

    /// A pull quote with an optional attribution.
    Quote {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },

    /// An attention box.
    Callout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Severity flavor; info when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<CalloutVariant>,
    },

    /// A grid of titled cards.
    Grid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Column count, 1-3; treated as 2 when absent or out of range
        #[serde(default, skip_serializing_if = "Option::is_none")]
        columns: Option<u8>,
        items: Vec<GridItem>,
    },

    /// An image with alt text and an optional caption.
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },

    /// A row of statistics.
    Stat {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<StatItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        columns: Option<u8>,
    },

    /// A row of keyword tags.
    Tags {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<String>,
    },

    /// A vertical timeline of events.
    Timeline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<TimelineItem>,
    },

    /// A labeled comparison matrix.
    ///
    /// `rows[i].values` is expected to line up with `columns`; mismatches
    /// are settled at render time (short rows padded, excess ignored).
    Comparison {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        columns: Vec<String>,
        rows: Vec<ComparisonRow>,
    },

    /// A plain table. Unlike `comparison`, rows are bare string arrays.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },

    /// A code listing.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    /// Collapsible question/answer items.
    Accordion {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<AccordionItem>,
    },

    /// Numbered procedure steps.
    Steps {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<StepItem>,
    },

    /// Labeled progress bars.
    Progress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<ProgressItem>,
    },

    /// A highlighted text strip.
    Highlight {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
        /// Highlight color; yellow when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<HighlightColor>,
    },

    /// Term/definition pairs.
    Definition {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<DefinitionItem>,
    },

    /// Side-by-side pros and cons lists.
    #[serde(rename = "proscons")]
    ProsCons {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        pros: Vec<String>,
        cons: Vec<String>,
    },

    /// An embedded video.
    Video {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        src: String,
        /// Embed flavor; custom (a plain video element) when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<VideoPlatform>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    /// A horizontal separator.
    Divider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(
            default,
            rename = "dividerStyle",
            skip_serializing_if = "Option::is_none"
        )]
        style: Option<DividerStyle>,
        /// Label for the `text` divider style
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// A link preview card.
    #[serde(rename = "linkcard")]
    LinkCard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        url: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },

    /// Labeled score bars (e.g. review criteria).
    Rating {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        items: Vec<RatingItem>,
    },

    /// Any tag outside the closed set. Renders as nothing.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            id: None,
            text: text.into(),
        }
    }

    /// Create a quote block.
    pub fn quote(text: impl Into<String>) -> Self {
        ContentBlock::Quote {
            id: None,
            text: text.into(),
            author: None,
        }
    }

    /// Create a bullet list block.
    pub fn list<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        ContentBlock::List {
            id: None,
            items: items.into_iter().map(Into::into).collect(),
            title: None,
            style: None,
        }
    }

    /// The wire tag for this block, or `None` for [`ContentBlock::Unknown`].
    pub fn tag(&self) -> Option<&'static str> {
        Some(match self {
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::Callout { .. } => "callout",
            ContentBlock::Grid { .. } => "grid",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Stat { .. } => "stat",
            ContentBlock::Tags { .. } => "tags",
            ContentBlock::Timeline { .. } => "timeline",
            ContentBlock::Comparison { .. } => "comparison",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Code { .. } => "code",
            ContentBlock::Accordion { .. } => "accordion",
            ContentBlock::Steps { .. } => "steps",
            ContentBlock::Progress { .. } => "progress",
            ContentBlock::Highlight { .. } => "highlight",
            ContentBlock::Definition { .. } => "definition",
            ContentBlock::ProsCons { .. } => "proscons",
            ContentBlock::Video { .. } => "video",
            ContentBlock::Divider { .. } => "divider",
            ContentBlock::LinkCard { .. } => "linkcard",
            ContentBlock::Rating { .. } => "rating",
            ContentBlock::Unknown => return None,
        })
    }

    /// Check if this block came from an unrecognized tag.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ContentBlock::Unknown)
    }

    /// Plain text carried by this block, emphasis markers stripped.
    ///
    /// Purely structural blocks (image, video, divider) yield `None`.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            ContentBlock::Paragraph { text, .. }
            | ContentBlock::Quote { text, .. }
            | ContentBlock::Callout { text, .. }
            | ContentBlock::Highlight { text, .. } => Some(strip_emphasis(text)),
            ContentBlock::List { items, .. } | ContentBlock::Tags { items, .. } => {
                Some(items.iter().map(|i| strip_emphasis(i)).collect::<Vec<_>>().join("\n"))
            }
            ContentBlock::Grid { items, .. } => Some(
                items
                    .iter()
                    .map(|i| format!("{}: {}", i.title, i.description))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Stat { items, .. } => Some(
                items
                    .iter()
                    .map(|i| format!("{}: {}", i.label, i.value))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Timeline { items, .. } => Some(
                items
                    .iter()
                    .map(|i| i.title.clone())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Comparison { rows, .. } => Some(
                rows.iter()
                    .map(|r| r.label.clone())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Table { rows, .. } => Some(
                rows.iter()
                    .map(|r| r.join("\t"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Code { code, .. } => Some(code.clone()),
            ContentBlock::Accordion { items, .. } => Some(
                items
                    .iter()
                    .map(|i| format!("{}\n{}", i.question, i.answer))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Steps { items, .. } => Some(
                items
                    .iter()
                    .map(|i| format!("{}. {}", i.step, i.title))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Progress { items, .. } => Some(
                items
                    .iter()
                    .map(|i| i.label.clone())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Definition { items, .. } => Some(
                items
                    .iter()
                    .map(|i| format!("{}: {}", i.term, i.definition))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::ProsCons { pros, cons, .. } => {
                Some(pros.iter().chain(cons.iter()).cloned().collect::<Vec<_>>().join("\n"))
            }
            ContentBlock::LinkCard { title, .. } => Some(title.clone()),
            ContentBlock::Rating { items, .. } => Some(
                items
                    .iter()
                    .map(|i| i.label.clone())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ContentBlock::Image { .. }
            | ContentBlock::Video { .. }
            | ContentBlock::Divider { .. }
            | ContentBlock::Unknown => None,
        }
    }
}

/// List marker style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Plain bullets (default)
    #[default]
    Bullet,
    /// Check marks
    Check,
    /// Decimal numbering
    Number,
}

/// Callout severity flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    /// Neutral information (default)
    #[default]
    Info,
    /// Something to watch out for
    Warning,
    /// A positive outcome
    Success,
}

/// Direction of a statistic's movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Arrow glyph for this trend.
    pub fn arrow(&self) -> char {
        match self {
            Trend::Up => '\u{2191}',
            Trend::Down => '\u{2193}',
            Trend::Flat => '\u{2192}',
        }
    }
}

/// Highlight strip color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Pink,
}

/// Video embed flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Bilibili,
    /// A directly playable media URL
    #[default]
    Custom,
}

/// Divider appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    /// A plain rule (default)
    #[default]
    Simple,
    /// A decorated rule
    Decorated,
    /// A rule with a centered label
    Text,
}

/// One card in a grid block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One entry in a stat block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One event in a timeline block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// One labeled row in a comparison block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

/// One collapsible item in an accordion block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccordionItem {
    pub question: String,
    pub answer: String,
}

/// One numbered step in a steps block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepItem {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// One bar in a progress block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressItem {
    pub label: String,
    pub value: f64,
    /// Bar maximum; 100 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// One term in a definition block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionItem {
    pub term: String,
    pub definition: String,
}

/// One scored entry in a rating block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingItem {
    pub label: String,
    pub score: f64,
    /// Score ceiling; 5 when absent
    #[serde(
        default,
        rename = "maxScore",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_score: Option<f64>,
}
