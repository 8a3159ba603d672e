//! Document model types for structured articles.
//!
//! This module defines the representation that bridges schema validation and
//! infographic rendering: a [`Document`] of ordered [`Section`]s, each an
//! ordered run of tagged [`ContentBlock`]s. The model is owned immutably by
//! the rendering pass; nothing here is shared or mutated after parse.

mod block;
mod document;
pub mod inline;

pub use block::{
    AccordionItem, CalloutVariant, ComparisonRow, ContentBlock, DefinitionItem, DividerStyle,
    GridItem, HighlightColor, ListStyle, ProgressItem, RatingItem, StatItem, StepItem,
    TimelineItem, Trend, VideoPlatform,
};
pub use document::{section_ordinal, Document, Meta, Section};
pub use inline::{parse_spans, strip_emphasis, InlineParser, Span};
