// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schriftwerk-document: Binary document generation for Schriftwerk.
//
// Every writer takes plain text, lays it out one line at a time, and either
// returns the serialised bytes or persists them at a destination path.

pub mod pdf;
pub mod slides;
pub mod spreadsheet;
pub mod word;

mod package;

pub use pdf::writer::PdfWriter;
pub use slides::SlideDeck;
pub use spreadsheet::SpreadsheetWriter;
pub use word::WordWriter;
