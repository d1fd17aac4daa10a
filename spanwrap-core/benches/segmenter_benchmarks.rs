//! Performance benchmarks for TextSegmenter
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spanwrap_core::TextSegmenter;
use std::hint::black_box;

/// Generate markup of roughly `size` bytes with a line break every sentence
fn generate_markup(size: usize) -> String {
    let base_sentence = "This is a test sentence with some reasonable length.<br>";
    let repeat_count = size / base_sentence.len() + 1;
    base_sentence.repeat(repeat_count)
}

/// Benchmark different input sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let segmenter = TextSegmenter::new();

    for size in [1024, 10_240, 102_400] {
        let markup = generate_markup(size);

        group.throughput(Throughput::Bytes(markup.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &markup, |b, markup| {
            b.iter(|| {
                let mut content = black_box(markup.clone());
                segmenter.segment(&mut content)
            });
        });
    }

    group.finish();
}

/// Compare literal and regex separators on the same input
fn bench_separators(c: &mut Criterion) {
    let mut group = c.benchmark_group("separators");
    let markup = generate_markup(10_240);

    let literal = TextSegmenter::new();
    let pattern = TextSegmenter::with_pattern(r"\s+").unwrap();

    group.bench_function("literal", |b| {
        b.iter(|| literal.segment_text(black_box(&markup)))
    });
    group.bench_function("regex", |b| {
        b.iter(|| pattern.segment_text(black_box(&markup)))
    });

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_separators);
criterion_main!(benches);
