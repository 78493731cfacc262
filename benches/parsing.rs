//! Benchmarks for whatsarchive parsing and rendering.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- sanitize`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use whatsarchive::config::ArchiveConfig;
use whatsarchive::core::color::ColorTable;
use whatsarchive::core::models::{Conversation, OutputConfig};
use whatsarchive::core::output::{to_csv, to_html, to_json};
use whatsarchive::core::sanitize::ContentSanitizer;
use whatsarchive::parser::ArchiveParser;
use whatsarchive::parsing::grammar::LineClassifier;

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: &[&str] = &[
    "Message number {i}",
    "see https://example.com/page?id={i}&ref=chat",
    "<attached: 000{i}-PHOTO-2024-01-15.jpg>",
    "first line {i}\nsecond line",
    "שלום {i}",
];

fn generate_transcript(count: usize) -> String {
    let mut out = String::with_capacity(count * 48);
    out.push_str("15/01/24, 09:00 - Messages and calls are end-to-end encrypted.\r\n");
    for i in 0..count {
        let author = ["Alice", "Bob", "Charlie"][i % 3];
        let body = BODIES[i % BODIES.len()].replace("{i}", &i.to_string());
        if i % 2 == 0 {
            out.push_str(&format!("15/01/24, {:02}:{:02} - {author}: {body}\r\n", (i / 60) % 24, i % 60));
        } else {
            out.push_str(&format!("[15/01/24, {:02}:{:02}:00] {author}: {body}\r\n", (i / 60) % 24, i % 60));
        }
    }
    out
}

fn parse(text: &str) -> Conversation {
    ArchiveParser::new().parse_str(text, "bench.txt").unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = ArchiveParser::with_config(ArchiveConfig::default());

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let conversation = parser.parse_str(black_box(text), "bench.txt").unwrap();
                black_box(conversation)
            });
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = LineClassifier::new().unwrap();
    let text = generate_transcript(10_000);
    let records: Vec<&str> = text.split("\r\n").filter(|r| !r.is_empty()).collect();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("10000", |b| {
        b.iter(|| {
            for record in &records {
                black_box(classifier.classify(black_box(record)).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    let sanitizer = ContentSanitizer::new().unwrap();

    for body in BODIES {
        let body = body.replace("{i}", "42");
        group.bench_with_input(BenchmarkId::from_parameter(&body), &body, |b, body| {
            b.iter(|| black_box(sanitizer.sanitize(black_box(body))));
        });
    }
    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    let authors: Vec<String> = (0..1_000).map(|i| format!("Author {i}")).collect();

    c.bench_function("color_table_cold", |b| {
        b.iter(|| {
            let mut table = ColorTable::new();
            for author in &authors {
                black_box(table.color_for(author));
            }
        });
    });

    let mut warm = ColorTable::new();
    for author in &authors {
        warm.color_for(author);
    }
    c.bench_function("color_table_warm", |b| {
        b.iter(|| {
            for author in &authors {
                black_box(warm.color_for(author));
            }
        });
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::all();

    for size in [1_000_usize, 10_000] {
        let conversation = parse(&generate_transcript(size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("html", size), &conversation, |b, conv| {
            b.iter(|| black_box(to_html(black_box(conv), &config)));
        });
        group.bench_with_input(BenchmarkId::new("json", size), &conversation, |b, conv| {
            b.iter(|| black_box(to_json(black_box(conv), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("csv", size), &conversation, |b, conv| {
            b.iter(|| black_box(to_csv(black_box(conv), &config).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_full_parse,
    bench_classify,
    bench_sanitize,
    bench_colors,
    bench_output,
);

criterion_main!(benches);
