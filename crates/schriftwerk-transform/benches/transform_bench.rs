// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the text transforms and correction splicing in the
// schriftwerk-transform crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use schriftwerk_transform::GrammarMatch;
use schriftwerk_transform::grammar::apply_corrections;
use schriftwerk_transform::text;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}. the quick brown fox jumps over the lazy dog. it's {i}st."))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark the casing transforms on ~2000 lines of text.
fn bench_casing(c: &mut Criterion) {
    let content = sample_text(2000);

    c.bench_function("sentence_case (2000 lines)", |b| {
        b.iter(|| black_box(text::sentence_case(black_box(&content))));
    });
    c.bench_function("title_case (2000 lines)", |b| {
        b.iter(|| black_box(text::title_case(black_box(&content))));
    });
}

/// Benchmark the line-oriented transforms.
fn bench_layout(c: &mut Criterion) {
    let content = sample_text(2000);

    c.bench_function("paginate (2000 lines)", |b| {
        b.iter(|| black_box(text::paginate(black_box(&content))));
    });
    c.bench_function("tabulate (2000 lines)", |b| {
        b.iter(|| black_box(text::tabulate(black_box(&content))));
    });
}

/// Benchmark splicing one correction into every line.
fn bench_apply_corrections(c: &mut Criterion) {
    let content = sample_text(2000);
    // Offsets count UTF-16 units, like LanguageTool's.
    let units: Vec<u16> = content.encode_utf16().collect();
    let newline = u16::from(b'\n');
    let line_starts = std::iter::once(0).chain(
        units
            .iter()
            .enumerate()
            .filter(|(_, unit)| **unit == newline)
            .map(|(i, _)| i + 1),
    );
    let matches: Vec<GrammarMatch> = line_starts
        .filter(|start| start + 4 <= units.len())
        .map(|start| GrammarMatch {
            offset: start,
            length: 4,
            replacements: vec!["LINE".into()],
            message: String::new(),
            rule_id: None,
        })
        .collect();

    c.bench_function("apply_corrections (2000 matches)", |b| {
        b.iter(|| black_box(apply_corrections(black_box(&content), black_box(&matches))));
    });
}

criterion_group!(benches, bench_casing, bench_layout, bench_apply_corrections);
criterion_main!(benches);
