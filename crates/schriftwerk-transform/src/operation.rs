// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The fixed operation menu.

use schriftwerk_core::DocumentFormat;

/// One entry of the menu, chosen by number. Anything unrecognised is
/// `Passthrough`, which leaves the content untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CorrectGrammar,
    Rephrase,
    UpperCase,
    LowerCase,
    SentenceCase,
    TitleCase,
    SwapCase,
    Paginate,
    Columnize,
    Tabulate,
    ToPdf,
    ToSpreadsheet,
    ToWordDocument,
    ToSlides,
    CodeFence,
    Passthrough,
}

impl Operation {
    /// Menu entries in display order. `Passthrough` is not listed.
    pub const ALL: [Operation; 15] = [
        Self::CorrectGrammar,
        Self::Rephrase,
        Self::UpperCase,
        Self::LowerCase,
        Self::SentenceCase,
        Self::TitleCase,
        Self::SwapCase,
        Self::Paginate,
        Self::Columnize,
        Self::Tabulate,
        Self::ToPdf,
        Self::ToSpreadsheet,
        Self::ToWordDocument,
        Self::ToSlides,
        Self::CodeFence,
    ];

    /// Parse the user's menu choice. Surrounding whitespace is ignored; the
    /// rest must be a menu number exactly as printed, so `"03"` and `"+3"`
    /// are not entries.
    pub fn from_choice(choice: &str) -> Self {
        let choice = choice.trim();
        Self::ALL
            .iter()
            .zip(1usize..)
            .find(|(_, number)| number.to_string() == choice)
            .map(|(op, _)| *op)
            .unwrap_or(Self::Passthrough)
    }

    /// 1-based menu number, `None` for `Passthrough`.
    pub fn menu_number(&self) -> Option<usize> {
        Self::ALL.iter().position(|op| op == self).map(|idx| idx + 1)
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::CorrectGrammar => "Correct Grammar and Spelling",
            Self::Rephrase => "Rephrase Sentences (Simple simulation)",
            Self::UpperCase => "Change to Upper Case",
            Self::LowerCase => "Change to Lower Case",
            Self::SentenceCase => "Change to Sentence Case",
            Self::TitleCase => "Capitalize Each Word",
            Self::SwapCase => "Toggle Case (swap upper/lower)",
            Self::Paginate => "Page Formatting (add page breaks every 30 lines)",
            Self::Columnize => "Create Columns (simulate with tab spaces)",
            Self::Tabulate => "Create Tables (basic markdown table)",
            Self::ToPdf => "Convert to PDF",
            Self::ToSpreadsheet => "Convert to Excel",
            Self::ToWordDocument => "Convert to Word",
            Self::ToSlides => "Convert to PowerPoint",
            Self::CodeFence => "Convert to Code Format (wrap in ``` )",
            Self::Passthrough => "Leave Unchanged",
        }
    }

    /// The binary format this operation generates, if it is a conversion.
    pub fn target_format(&self) -> Option<DocumentFormat> {
        match self {
            Self::ToPdf => Some(DocumentFormat::Pdf),
            Self::ToSpreadsheet => Some(DocumentFormat::Spreadsheet),
            Self::ToWordDocument => Some(DocumentFormat::WordDocument),
            Self::ToSlides => Some(DocumentFormat::SlideDeck),
            _ => None,
        }
    }

    /// Whether the operation writes a binary document itself.
    pub fn is_conversion(&self) -> bool {
        self.target_format().is_some()
    }

    /// Conventional extension for the destination file. A hint only.
    pub fn expected_extension(&self) -> Option<&'static str> {
        self.target_format().map(|format| format.extension())
    }
}
