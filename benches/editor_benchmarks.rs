//! Benchmarks for the work done on every keystroke and scroll.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slate_buffer::TextBuffer;
use slate_core::gutter::{gutter_width, visible_labels};
use slate_core::layout::LayoutMetrics;
use slate_core::search::{search, SearchOptions};
use slate_core::{GutterMetrics, MonospaceLayout, SearchDirection, Viewport};

/// Generates a large text string for benchmarking.
fn generate_large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {}: This is a sample line of text for benchmarking purposes.\n", i))
        .collect()
}

/// Benchmarks relayout after an edit, with and without wrapping.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let metrics = LayoutMetrics::for_font(15.0, 1.3);

    for size in [1000, 10000, 100000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("no_wrap", size), &text, |b, text| {
            b.iter(|| {
                let layout = MonospaceLayout::from_lines(text.split('\n'), metrics, None);
                black_box(layout)
            })
        });

        group.bench_with_input(BenchmarkId::new("wrap_400px", size), &text, |b, text| {
            b.iter(|| {
                let layout = MonospaceLayout::from_lines(text.split('\n'), metrics, Some(400.0));
                black_box(layout)
            })
        });
    }

    group.finish();
}

/// Benchmarks the gutter: width for the block count, labels for a scrolled viewport.
fn bench_gutter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gutter");
    let metrics = GutterMetrics::default();

    group.bench_function("width", |b| {
        b.iter(|| gutter_width(black_box(123_456), metrics))
    });

    for size in [1000, 100000].iter() {
        let layout = MonospaceLayout::uniform(*size, 20.0);
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.scroll_rows(black_box((*size / 2) as i32), &layout);

        group.bench_with_input(BenchmarkId::new("visible_labels", size), &layout, |b, layout| {
            b.iter(|| black_box(visible_labels(layout, &viewport)))
        });
    }

    group.finish();
}

/// Benchmarks find next, including a wrap back to the start.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let buffer = TextBuffer::from(generate_large_text(10000).as_str());
    let end = buffer.len_chars();

    group.bench_function("forward_hit", |b| {
        b.iter(|| {
            search(
                &buffer,
                black_box("Line 5000:"),
                0..0,
                SearchDirection::Forward,
                SearchOptions::default(),
            )
        })
    });

    group.bench_function("forward_wraps", |b| {
        b.iter(|| {
            search(
                &buffer,
                black_box("Line 10:"),
                end..end,
                SearchDirection::Forward,
                SearchOptions::default(),
            )
        })
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            search(
                &buffer,
                black_box("not in the text"),
                0..0,
                SearchDirection::Forward,
                SearchOptions::default(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_gutter, bench_search);
criterion_main!(benches);
