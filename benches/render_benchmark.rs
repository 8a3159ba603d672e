//! Rendering benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use artigram::model::{ContentBlock, Document, Section, StatItem};
use artigram::render::{to_html, to_text, RenderOptions};

fn sample_document(sections: usize) -> Document {
    let mut doc = Document::new("Benchmark article");
    for i in 0..sections {
        let mut section = Section::new(format!("Section {}", i + 1));
        section.add_block(ContentBlock::paragraph(
            "A paragraph with some **emphasized** text and enough words to be \
             representative of real article prose rather than a stub.",
        ));
        section.add_block(ContentBlock::list(["first", "second", "third"]));
        section.add_block(ContentBlock::Stat {
            id: None,
            items: vec![
                StatItem {
                    label: "Users".into(),
                    value: "10k".into(),
                    trend: None,
                    note: None,
                },
                StatItem {
                    label: "Growth".into(),
                    value: "25%".into(),
                    trend: None,
                    note: None,
                },
            ],
            columns: Some(2),
        });
        doc.add_section(section);
    }
    doc
}

fn bench_render(c: &mut Criterion) {
    let doc = sample_document(20);
    let options = RenderOptions::new().standalone(true);

    c.bench_function("to_html_20_sections", |b| {
        b.iter(|| to_html(black_box(&doc), black_box(&options)).unwrap())
    });

    c.bench_function("to_text_20_sections", |b| {
        b.iter(|| to_text(black_box(&doc), black_box(&options)).unwrap())
    });
}

fn bench_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&sample_document(20)).unwrap();

    c.bench_function("parse_str_20_sections", |b| {
        b.iter(|| artigram::parse_str(black_box(&json)).unwrap())
    });
}

criterion_group!(benches, bench_render, bench_parse);
criterion_main!(benches);
