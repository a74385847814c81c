// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document generation in the schriftwerk-document crate.
// Lays out a few pages of synthetic text as PDF and as a spreadsheet.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use schriftwerk_document::{PdfWriter, SpreadsheetWriter};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {i}: the quick brown fox jumps over the lazy dog."))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark PDF layout of 500 lines (11 Letter pages).
fn bench_pdf_from_text(c: &mut Criterion) {
    let text = sample_text(500);
    let writer = PdfWriter::letter();

    c.bench_function("pdf_from_text (500 lines)", |b| {
        b.iter(|| black_box(writer.create_from_text(black_box(&text))));
    });
}

/// Benchmark workbook serialisation of 500 rows.
fn bench_spreadsheet_from_text(c: &mut Criterion) {
    let text = sample_text(500);
    let writer = SpreadsheetWriter::new();

    c.bench_function("spreadsheet_from_text (500 lines)", |b| {
        b.iter(|| black_box(writer.create_from_text(black_box(&text))));
    });
}

criterion_group!(benches, bench_pdf_from_text, bench_spreadsheet_from_text);
criterion_main!(benches);
