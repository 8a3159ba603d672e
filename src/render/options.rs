//! Rendering options and configuration.

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Wrap output in a complete HTML page instead of a fragment
    pub standalone: bool,

    /// Stylesheet href linked from standalone output; the theme itself is
    /// supplied externally
    pub stylesheet: Option<String>,

    /// Emit zero-padded ordinal labels ("01", "02", …) on sections
    pub section_numbers: bool,

    /// `lang` attribute for standalone output
    pub lang: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable full-page output.
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Link a stylesheet from standalone output.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Enable or disable section ordinal labels.
    pub fn with_section_numbers(mut self, on: bool) -> Self {
        self.section_numbers = on;
        self
    }

    /// Set the page language for standalone output.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            stylesheet: None,
            section_numbers: true,
            lang: None,
        }
    }
}
