//! HTML rendering for structured articles.

use std::time::Instant;

use crate::error::Result;
use crate::model::{
    section_ordinal, AccordionItem, CalloutVariant, ComparisonRow, ContentBlock, DefinitionItem,
    Document, DividerStyle, GridItem, HighlightColor, InlineParser, ListStyle, Meta, ProgressItem,
    RatingItem, Section, Span, StatItem, StepItem, TimelineItem, Trend, VideoPlatform,
};

use super::state::{CopyFeedback, Disclosure};
use super::{ImageAspect, RenderOptions};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
///
/// Dispatch is an exhaustive match over the block tag; every tag in the
/// closed set produces an element, and [`ContentBlock::Unknown`] produces
/// nothing at all. All user text is escaped.
pub struct HtmlRenderer {
    options: RenderOptions,
    inline: InlineParser,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            inline: InlineParser::new(),
        }
    }

    /// Render a document to an HTML string.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();

        if self.options.standalone {
            let lang = self.options.lang.as_deref().unwrap_or("en");
            out.push_str("<!DOCTYPE html>\n");
            out.push_str(&format!("<html lang=\"{}\">\n", escape_html(lang)));
            out.push_str("<head>\n<meta charset=\"utf-8\">\n");
            out.push_str(
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            );
            out.push_str(&format!("<title>{}</title>\n", escape_html(&doc.title)));
            if let Some(ref href) = self.options.stylesheet {
                out.push_str(&format!(
                    "<link rel=\"stylesheet\" href=\"{}\">\n",
                    escape_html(href)
                ));
            }
            out.push_str("</head>\n<body>\n");
        }

        out.push_str("<article class=\"infographic\">\n");
        self.render_header(&mut out, doc);
        for (index, section) in doc.sections.iter().enumerate() {
            self.render_section(&mut out, section, index);
        }
        out.push_str("</article>\n");

        if self.options.standalone {
            out.push_str("</body>\n</html>\n");
        }
        Ok(out)
    }

    fn render_header(&self, out: &mut String, doc: &Document) {
        out.push_str("<header class=\"article-header\">\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape_html(&doc.title)));
        if let Some(ref subtitle) = doc.subtitle {
            out.push_str(&format!(
                "<p class=\"subtitle\">{}</p>\n",
                escape_html(subtitle)
            ));
        }
        if let Some(ref meta) = doc.meta {
            if !meta.is_empty() {
                self.render_meta(out, meta);
            }
        }
        out.push_str("</header>\n");
    }

    fn render_meta(&self, out: &mut String, meta: &Meta) {
        out.push_str("<div class=\"article-meta\">");
        let mut parts = Vec::new();
        if let Some(ref author) = meta.author {
            parts.push(format!(
                "<span class=\"meta-author\">{}</span>",
                escape_html(author)
            ));
        }
        if let Some(ref date) = meta.date {
            parts.push(format!(
                "<span class=\"meta-date\">{}</span>",
                escape_html(date)
            ));
        }
        if let Some(ref read_time) = meta.read_time {
            parts.push(format!(
                "<span class=\"meta-read-time\">{}</span>",
                escape_html(read_time)
            ));
        }
        out.push_str(&parts.join(" \u{b7} "));
        out.push_str("</div>\n");
    }

    fn render_section(&self, out: &mut String, section: &Section, index: usize) {
        out.push_str("<section class=\"section\">\n");
        out.push_str("<div class=\"section-heading\">");
        if self.options.section_numbers {
            out.push_str(&format!(
                "<span class=\"section-ordinal\">{}</span>",
                section_ordinal(index)
            ));
        }
        out.push_str(&format!("<h2>{}</h2>", escape_html(&section.title)));
        out.push_str("</div>\n");

        for block in &section.content {
            self.render_block(out, block);
        }
        out.push_str("</section>\n");
    }

    /// Render one block. Unknown tags yield no output.
    pub fn render_block(&self, out: &mut String, block: &ContentBlock) {
        match block {
            ContentBlock::Paragraph { id, text } => {
                out.push_str(&format!(
                    "<p{}>{}</p>\n",
                    id_attr(id),
                    self.inline_html(text)
                ));
            }
            ContentBlock::List {
                id,
                items,
                title,
                style,
            } => self.render_list(out, id, items, title.as_deref(), style.unwrap_or_default()),
            ContentBlock::Quote { id, text, author } => {
                out.push_str(&format!("<blockquote{}>\n", id_attr(id)));
                out.push_str(&format!("<p>{}</p>\n", self.inline_html(text)));
                if let Some(author) = author {
                    out.push_str(&format!("<cite>{}</cite>\n", escape_html(author)));
                }
                out.push_str("</blockquote>\n");
            }
            ContentBlock::Callout {
                id,
                text,
                title,
                variant,
            } => {
                let class = match variant.unwrap_or_default() {
                    CalloutVariant::Info => "callout callout-info",
                    CalloutVariant::Warning => "callout callout-warning",
                    CalloutVariant::Success => "callout callout-success",
                };
                out.push_str(&format!("<aside class=\"{}\"{}>\n", class, id_attr(id)));
                if let Some(title) = title {
                    out.push_str(&format!(
                        "<p class=\"callout-title\">{}</p>\n",
                        escape_html(title)
                    ));
                }
                out.push_str(&format!("<p>{}</p>\n", self.inline_html(text)));
                out.push_str("</aside>\n");
            }
            ContentBlock::Grid { id, columns, items } => {
                self.render_grid(out, id, *columns, items)
            }
            ContentBlock::Image {
                id,
                src,
                alt,
                caption,
            } => self.render_image(out, id, src, alt, caption.as_deref()),
            ContentBlock::Stat { id, items, columns } => {
                self.render_stat(out, id, items, *columns)
            }
            ContentBlock::Tags { id, items } => {
                out.push_str(&format!("<ul class=\"tags\"{}>", id_attr(id)));
                for item in items {
                    out.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                out.push_str("</ul>\n");
            }
            ContentBlock::Timeline { id, items } => self.render_timeline(out, id, items),
            ContentBlock::Comparison { id, columns, rows } => {
                self.render_comparison(out, id, columns, rows)
            }
            ContentBlock::Table { id, headers, rows } => {
                self.render_table(out, id, headers, rows)
            }
            ContentBlock::Code {
                id,
                code,
                language,
                title,
            } => self.render_code(out, id, code, language.as_deref(), title.as_deref()),
            ContentBlock::Accordion { id, items } => self.render_accordion(out, id, items),
            ContentBlock::Steps { id, items } => self.render_steps(out, id, items),
            ContentBlock::Progress { id, items } => self.render_progress(out, id, items),
            ContentBlock::Highlight { id, text, color } => {
                let color = color.unwrap_or_default();
                let class = match color {
                    HighlightColor::Yellow => "highlight highlight-yellow",
                    HighlightColor::Blue => "highlight highlight-blue",
                    HighlightColor::Green => "highlight highlight-green",
                    HighlightColor::Pink => "highlight highlight-pink",
                };
                out.push_str(&format!(
                    "<p class=\"{}\"{}><mark>{}</mark></p>\n",
                    class,
                    id_attr(id),
                    self.inline_html(text)
                ));
            }
            ContentBlock::Definition { id, items } => self.render_definition(out, id, items),
            ContentBlock::ProsCons { id, pros, cons } => {
                self.render_proscons(out, id, pros, cons)
            }
            ContentBlock::Video {
                id,
                src,
                platform,
                title,
            } => self.render_video(out, id, src, platform.unwrap_or_default(), title.as_deref()),
            ContentBlock::Divider { id, style, text } => {
                self.render_divider(out, id, style.unwrap_or_default(), text.as_deref())
            }
            ContentBlock::LinkCard {
                id,
                url,
                title,
                description,
                image,
            } => self.render_linkcard(out, id, url, title, description.as_deref(), image.as_deref()),
            ContentBlock::Rating { id, items } => self.render_rating(out, id, items),
            ContentBlock::Unknown => {}
        }
    }

    fn render_list(
        &self,
        out: &mut String,
        id: &Option<String>,
        items: &[String],
        title: Option<&str>,
        style: ListStyle,
    ) {
        let (tag, class) = match style {
            ListStyle::Bullet => ("ul", "list list-bullet"),
            ListStyle::Check => ("ul", "list list-check"),
            ListStyle::Number => ("ol", "list list-number"),
        };
        out.push_str(&format!("<div class=\"list-block\"{}>\n", id_attr(id)));
        if let Some(title) = title {
            out.push_str(&format!(
                "<p class=\"list-title\">{}</p>\n",
                escape_html(title)
            ));
        }
        out.push_str(&format!("<{} class=\"{}\">\n", tag, class));
        for item in items {
            out.push_str(&format!("<li>{}</li>\n", self.inline_html(item)));
        }
        out.push_str(&format!("</{}>\n</div>\n", tag));
    }

    fn render_grid(
        &self,
        out: &mut String,
        id: &Option<String>,
        columns: Option<u8>,
        items: &[GridItem],
    ) {
        out.push_str(&format!(
            "<div class=\"grid grid-cols-{}\"{}>\n",
            clamp_columns(columns),
            id_attr(id)
        ));
        for item in items {
            out.push_str("<div class=\"grid-card\">");
            if let Some(ref icon) = item.icon {
                out.push_str(&format!(
                    "<span class=\"grid-icon\">{}</span>",
                    escape_html(icon)
                ));
            }
            out.push_str(&format!(
                "<p class=\"grid-title\">{}</p><p class=\"grid-desc\">{}</p>",
                escape_html(&item.title),
                escape_html(&item.description)
            ));
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    fn render_image(
        &self,
        out: &mut String,
        id: &Option<String>,
        src: &str,
        alt: &str,
        caption: Option<&str>,
    ) {
        // Natural dimensions are unknown until the image loads, so the
        // frame starts at the 16:9 default preset.
        let aspect = ImageAspect::default();
        out.push_str(&format!("<figure class=\"image\"{}>\n", id_attr(id)));
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" style=\"aspect-ratio: {}\">\n",
            escape_html(src),
            escape_html(alt),
            aspect.css()
        ));
        if let Some(caption) = caption {
            out.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                escape_html(caption)
            ));
        }
        out.push_str("</figure>\n");
    }

    fn render_stat(
        &self,
        out: &mut String,
        id: &Option<String>,
        items: &[StatItem],
        columns: Option<u8>,
    ) {
        out.push_str(&format!(
            "<div class=\"stats stats-cols-{}\"{}>\n",
            clamp_columns(columns),
            id_attr(id)
        ));
        for item in items {
            out.push_str("<div class=\"stat\">");
            out.push_str(&format!(
                "<span class=\"stat-value\">{}</span>",
                escape_html(&item.value)
            ));
            if let Some(trend) = item.trend {
                out.push_str(&format!(
                    "<span class=\"stat-trend stat-trend-{}\">{}</span>",
                    trend_name(trend),
                    trend.arrow()
                ));
            }
            out.push_str(&format!(
                "<span class=\"stat-label\">{}</span>",
                escape_html(&item.label)
            ));
            if let Some(ref note) = item.note {
                out.push_str(&format!(
                    "<span class=\"stat-note\">{}</span>",
                    escape_html(note)
                ));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    fn render_timeline(&self, out: &mut String, id: &Option<String>, items: &[TimelineItem]) {
        out.push_str(&format!("<ol class=\"timeline\"{}>\n", id_attr(id)));
        for item in items {
            out.push_str("<li class=\"timeline-item\">");
            if let Some(ref time) = item.time {
                out.push_str(&format!(
                    "<span class=\"timeline-time\">{}</span>",
                    escape_html(time)
                ));
            }
            out.push_str(&format!(
                "<span class=\"timeline-title\">{}</span>",
                escape_html(&item.title)
            ));
            if let Some(ref desc) = item.desc {
                out.push_str(&format!(
                    "<span class=\"timeline-desc\">{}</span>",
                    escape_html(desc)
                ));
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ol>\n");
    }

    /// Comparison matrix: one label cell plus one cell per declared column.
    /// Short rows are padded with empty cells; excess values are ignored.
    fn render_comparison(
        &self,
        out: &mut String,
        id: &Option<String>,
        columns: &[String],
        rows: &[ComparisonRow],
    ) {
        out.push_str(&format!("<table class=\"comparison\"{}>\n", id_attr(id)));
        out.push_str("<thead><tr><th></th>");
        for column in columns {
            out.push_str(&format!("<th>{}</th>", escape_html(column)));
        }
        out.push_str("</tr></thead>\n<tbody>\n");
        for row in rows {
            out.push_str(&format!("<tr><th>{}</th>", escape_html(&row.label)));
            for i in 0..columns.len() {
                let value = row.values.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("<td>{}</td>", escape_html(value)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }

    /// Plain table; rows are settled against the header count like
    /// comparison rows against the column count.
    fn render_table(
        &self,
        out: &mut String,
        id: &Option<String>,
        headers: &[String],
        rows: &[Vec<String>],
    ) {
        out.push_str(&format!("<table class=\"table\"{}>\n", id_attr(id)));
        out.push_str("<thead><tr>");
        for header in headers {
            out.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        out.push_str("</tr></thead>\n<tbody>\n");
        for row in rows {
            out.push_str("<tr>");
            for i in 0..headers.len() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("<td>{}</td>", escape_html(value)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }

    fn render_code(
        &self,
        out: &mut String,
        id: &Option<String>,
        code: &str,
        language: Option<&str>,
        title: Option<&str>,
    ) {
        out.push_str(&format!("<figure class=\"code\"{}>\n", id_attr(id)));
        if let Some(title) = title {
            out.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                escape_html(title)
            ));
        }
        // A fresh block starts with no pending acknowledgement.
        let feedback = CopyFeedback::new();
        out.push_str(&format!(
            "<button class=\"copy\" type=\"button\">{}</button>\n",
            copy_button_label(&feedback, Instant::now())
        ));
        let class = language
            .map(|l| format!(" class=\"language-{}\"", escape_html(l)))
            .unwrap_or_default();
        out.push_str(&format!(
            "<pre><code{}>{}</code></pre>\n",
            class,
            escape_html(code)
        ));
        out.push_str("</figure>\n");
    }

    fn render_accordion(&self, out: &mut String, id: &Option<String>, items: &[AccordionItem]) {
        // Fresh disclosure state: exactly the first item open.
        let state = Disclosure::new(items.len());
        out.push_str(&format!("<div class=\"accordion\"{}>\n", id_attr(id)));
        for (i, item) in items.iter().enumerate() {
            let open = if state.is_open(i) { " open" } else { "" };
            out.push_str(&format!("<details{}>\n", open));
            out.push_str(&format!(
                "<summary>{}</summary>\n",
                escape_html(&item.question)
            ));
            out.push_str(&format!("<p>{}</p>\n", self.inline_html(&item.answer)));
            out.push_str("</details>\n");
        }
        out.push_str("</div>\n");
    }

    fn render_steps(&self, out: &mut String, id: &Option<String>, items: &[StepItem]) {
        out.push_str(&format!("<ol class=\"steps\"{}>\n", id_attr(id)));
        for item in items {
            out.push_str("<li class=\"step\">");
            out.push_str(&format!("<span class=\"step-no\">{}</span>", item.step));
            out.push_str(&format!(
                "<span class=\"step-title\">{}</span>",
                escape_html(&item.title)
            ));
            out.push_str(&format!(
                "<span class=\"step-desc\">{}</span>",
                escape_html(&item.description)
            ));
            out.push_str("</li>\n");
        }
        out.push_str("</ol>\n");
    }

    fn render_progress(&self, out: &mut String, id: &Option<String>, items: &[ProgressItem]) {
        out.push_str(&format!("<div class=\"progress-list\"{}>\n", id_attr(id)));
        for item in items {
            let percent = progress_percent(item);
            out.push_str("<div class=\"progress\">");
            out.push_str(&format!(
                "<span class=\"progress-label\">{}</span>",
                escape_html(&item.label)
            ));
            out.push_str(&format!(
                "<span class=\"progress-track\"><span class=\"progress-fill\" style=\"width: {:.0}%\"></span></span>",
                percent
            ));
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    fn render_definition(&self, out: &mut String, id: &Option<String>, items: &[DefinitionItem]) {
        out.push_str(&format!("<dl class=\"definitions\"{}>\n", id_attr(id)));
        for item in items {
            out.push_str(&format!("<dt>{}</dt>", escape_html(&item.term)));
            out.push_str(&format!(
                "<dd>{}</dd>\n",
                self.inline_html(&item.definition)
            ));
        }
        out.push_str("</dl>\n");
    }

    fn render_proscons(
        &self,
        out: &mut String,
        id: &Option<String>,
        pros: &[String],
        cons: &[String],
    ) {
        out.push_str(&format!("<div class=\"proscons\"{}>\n", id_attr(id)));
        for (class, items) in [("pros", pros), ("cons", cons)] {
            out.push_str(&format!("<ul class=\"{}\">\n", class));
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", self.inline_html(item)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }

    fn render_video(
        &self,
        out: &mut String,
        id: &Option<String>,
        src: &str,
        platform: VideoPlatform,
        title: Option<&str>,
    ) {
        out.push_str(&format!("<figure class=\"video\"{}>\n", id_attr(id)));
        let title_attr = title
            .map(|t| format!(" title=\"{}\"", escape_html(t)))
            .unwrap_or_default();
        match platform {
            VideoPlatform::Youtube | VideoPlatform::Bilibili => {
                out.push_str(&format!(
                    "<iframe src=\"{}\"{} allowfullscreen></iframe>\n",
                    escape_html(src),
                    title_attr
                ));
            }
            VideoPlatform::Custom => {
                out.push_str(&format!(
                    "<video controls src=\"{}\"{}></video>\n",
                    escape_html(src),
                    title_attr
                ));
            }
        }
        out.push_str("</figure>\n");
    }

    fn render_divider(
        &self,
        out: &mut String,
        id: &Option<String>,
        style: DividerStyle,
        text: Option<&str>,
    ) {
        match style {
            DividerStyle::Simple => {
                out.push_str(&format!(
                    "<hr class=\"divider divider-simple\"{}>\n",
                    id_attr(id)
                ));
            }
            DividerStyle::Decorated => {
                out.push_str(&format!(
                    "<hr class=\"divider divider-decorated\"{}>\n",
                    id_attr(id)
                ));
            }
            DividerStyle::Text => {
                out.push_str(&format!(
                    "<div class=\"divider divider-text\"{}><span>{}</span></div>\n",
                    id_attr(id),
                    escape_html(text.unwrap_or(""))
                ));
            }
        }
    }

    fn render_linkcard(
        &self,
        out: &mut String,
        id: &Option<String>,
        url: &str,
        title: &str,
        description: Option<&str>,
        image: Option<&str>,
    ) {
        out.push_str(&format!(
            "<a class=\"linkcard\" href=\"{}\" rel=\"noopener\"{}>\n",
            escape_html(url),
            id_attr(id)
        ));
        if let Some(image) = image {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"\" loading=\"lazy\">\n",
                escape_html(image)
            ));
        }
        out.push_str(&format!(
            "<span class=\"linkcard-title\">{}</span>\n",
            escape_html(title)
        ));
        if let Some(description) = description {
            out.push_str(&format!(
                "<span class=\"linkcard-desc\">{}</span>\n",
                escape_html(description)
            ));
        }
        out.push_str("</a>\n");
    }

    fn render_rating(&self, out: &mut String, id: &Option<String>, items: &[RatingItem]) {
        out.push_str(&format!("<div class=\"ratings\"{}>\n", id_attr(id)));
        for item in items {
            let max = item.max_score.unwrap_or(5.0).round().max(1.0) as usize;
            let filled = item.score.round().clamp(0.0, max as f64) as usize;
            let mut stars = String::new();
            stars.extend(std::iter::repeat('\u{2605}').take(filled));
            stars.extend(std::iter::repeat('\u{2606}').take(max - filled));
            out.push_str("<div class=\"rating\">");
            out.push_str(&format!(
                "<span class=\"rating-label\">{}</span>",
                escape_html(&item.label)
            ));
            out.push_str(&format!("<span class=\"rating-stars\">{}</span>", stars));
            out.push_str(&format!(
                "<span class=\"rating-score\">{}/{}</span>",
                format_number(item.score),
                max
            ));
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    /// Escape text and expand `**bold**` spans into `<strong>` elements.
    fn inline_html(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for span in self.inline.parse(text) {
            match span {
                Span::Plain(t) => out.push_str(&escape_html(t)),
                Span::Strong(t) => {
                    out.push_str("<strong>");
                    out.push_str(&escape_html(t));
                    out.push_str("</strong>");
                }
            }
        }
        out
    }
}

/// Label for the code block's copy affordance under the given feedback
/// state.
pub fn copy_button_label(feedback: &CopyFeedback, now: Instant) -> &'static str {
    if feedback.is_acknowledged(now) {
        "Copied"
    } else {
        "Copy"
    }
}

/// Fill percentage for a progress bar, clamped to 0-100.
fn progress_percent(item: &ProgressItem) -> f64 {
    let max = item.max.unwrap_or(100.0);
    if !(max > 0.0) {
        return 0.0;
    }
    (item.value / max * 100.0).clamp(0.0, 100.0)
}

fn clamp_columns(columns: Option<u8>) -> u8 {
    columns.unwrap_or(2).clamp(1, 3)
}

fn trend_name(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Flat => "flat",
    }
}

fn id_attr(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" id=\"{}\"", escape_html(id)),
        None => String::new(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Escape special characters for HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
