//! Plain-text rendering, used for terminal previews.

use crate::error::Result;
use crate::model::{section_ordinal, strip_emphasis, ContentBlock, Document, ListStyle};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// The same dispatch rules as HTML apply: every known tag produces output,
/// unknown tags produce nothing, emphasis markers are stripped.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str(&doc.title);
    out.push('\n');
    if let Some(ref subtitle) = doc.subtitle {
        out.push_str(subtitle);
        out.push('\n');
    }
    if let Some(ref meta) = doc.meta {
        let parts: Vec<&str> = [
            meta.author.as_deref(),
            meta.date.as_deref(),
            meta.read_time.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !parts.is_empty() {
            out.push_str(&parts.join(" | "));
            out.push('\n');
        }
    }
    out.push('\n');

    for (index, section) in doc.sections.iter().enumerate() {
        if options.section_numbers {
            out.push_str(&format!("{} {}\n\n", section_ordinal(index), section.title));
        } else {
            out.push_str(&format!("{}\n\n", section.title));
        }
        for block in &section.content {
            render_block(&mut out, block);
        }
    }

    Ok(out.trim_end().to_string() + "\n")
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Paragraph { text, .. }
        | ContentBlock::Highlight { text, .. } => {
            out.push_str(&strip_emphasis(text));
            out.push_str("\n\n");
        }
        ContentBlock::List {
            items,
            title,
            style,
            ..
        } => {
            if let Some(title) = title {
                out.push_str(title);
                out.push('\n');
            }
            for (i, item) in items.iter().enumerate() {
                let marker = match style.unwrap_or_default() {
                    ListStyle::Bullet => "- ".to_string(),
                    ListStyle::Check => "[x] ".to_string(),
                    ListStyle::Number => format!("{}. ", i + 1),
                };
                out.push_str(&marker);
                out.push_str(&strip_emphasis(item));
                out.push('\n');
            }
            out.push('\n');
        }
        ContentBlock::Quote { text, author, .. } => {
            out.push_str(&format!("\u{201c}{}\u{201d}", strip_emphasis(text)));
            if let Some(author) = author {
                out.push_str(&format!(" \u{2014} {}", author));
            }
            out.push_str("\n\n");
        }
        ContentBlock::Callout {
            text, title, ..
        } => {
            if let Some(title) = title {
                out.push_str(&format!("[{}] ", title));
            }
            out.push_str(&strip_emphasis(text));
            out.push_str("\n\n");
        }
        ContentBlock::Grid { items, .. } => {
            for item in items {
                out.push_str(&format!("* {}: {}\n", item.title, item.description));
            }
            out.push('\n');
        }
        ContentBlock::Image { alt, caption, .. } => {
            out.push_str(&format!("[image: {}]\n", caption.as_deref().unwrap_or(alt)));
            out.push('\n');
        }
        ContentBlock::Stat { items, .. } => {
            for item in items {
                out.push_str(&format!("{}: {}", item.label, item.value));
                if let Some(trend) = item.trend {
                    out.push(' ');
                    out.push(trend.arrow());
                }
                if let Some(ref note) = item.note {
                    out.push_str(&format!(" ({})", note));
                }
                out.push('\n');
            }
            out.push('\n');
        }
        ContentBlock::Tags { items, .. } => {
            out.push_str(
                &items
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            out.push_str("\n\n");
        }
        ContentBlock::Timeline { items, .. } => {
            for item in items {
                match &item.time {
                    Some(time) => out.push_str(&format!("{} \u{2013} {}", time, item.title)),
                    None => out.push_str(&item.title),
                }
                if let Some(ref desc) = item.desc {
                    out.push_str(&format!(": {}", desc));
                }
                out.push('\n');
            }
            out.push('\n');
        }
        ContentBlock::Comparison { columns, rows, .. } => {
            out.push_str(&format!(" \t{}\n", columns.join("\t")));
            for row in rows {
                let mut cells = vec![row.label.clone()];
                for i in 0..columns.len() {
                    cells.push(row.values.get(i).cloned().unwrap_or_default());
                }
                out.push_str(&cells.join("\t"));
                out.push('\n');
            }
            out.push('\n');
        }
        ContentBlock::Table { headers, rows, .. } => {
            out.push_str(&headers.join("\t"));
            out.push('\n');
            for row in rows {
                let cells: Vec<&str> = (0..headers.len())
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect();
                out.push_str(&cells.join("\t"));
                out.push('\n');
            }
            out.push('\n');
        }
        ContentBlock::Code { code, title, .. } => {
            if let Some(title) = title {
                out.push_str(title);
                out.push('\n');
            }
            out.push_str(code);
            out.push_str("\n\n");
        }
        ContentBlock::Accordion { items, .. } => {
            for item in items {
                out.push_str(&format!("Q: {}\nA: {}\n", item.question, item.answer));
            }
            out.push('\n');
        }
        ContentBlock::Steps { items, .. } => {
            for item in items {
                out.push_str(&format!(
                    "{}. {} \u{2013} {}\n",
                    item.step, item.title, item.description
                ));
            }
            out.push('\n');
        }
        ContentBlock::Progress { items, .. } => {
            for item in items {
                let max = item.max.unwrap_or(100.0);
                out.push_str(&format!("{}: {}/{}\n", item.label, item.value, max));
            }
            out.push('\n');
        }
        ContentBlock::Definition { items, .. } => {
            for item in items {
                out.push_str(&format!("{}: {}\n", item.term, strip_emphasis(&item.definition)));
            }
            out.push('\n');
        }
        ContentBlock::ProsCons { pros, cons, .. } => {
            for pro in pros {
                out.push_str(&format!("+ {}\n", strip_emphasis(pro)));
            }
            for con in cons {
                out.push_str(&format!("- {}\n", strip_emphasis(con)));
            }
            out.push('\n');
        }
        ContentBlock::Video { src, title, .. } => {
            out.push_str(&format!("[video: {}]\n", title.as_deref().unwrap_or(src)));
            out.push('\n');
        }
        ContentBlock::Divider { text, .. } => {
            match text {
                Some(text) => out.push_str(&format!("--- {} ---\n", text)),
                None => out.push_str("---\n"),
            }
            out.push('\n');
        }
        ContentBlock::LinkCard {
            url,
            title,
            description,
            ..
        } => {
            out.push_str(&format!("{} <{}>", title, url));
            if let Some(description) = description {
                out.push_str(&format!("\n{}", description));
            }
            out.push_str("\n\n");
        }
        ContentBlock::Rating { items, .. } => {
            for item in items {
                let max = item.max_score.unwrap_or(5.0);
                out.push_str(&format!("{}: {}/{}\n", item.label, item.score, max));
            }
            out.push('\n');
        }
        ContentBlock::Unknown => {}
    }
}
