// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Schriftwerk.

use serde::{Deserialize, Serialize};

/// A form feed is appended after this many lines when paginating.
pub const PAGINATE_EVERY: usize = 30;

/// Only this many leading lines make it onto the generated slide.
pub const SLIDE_BODY_LINE_LIMIT: usize = 10;

/// Title placed on the generated slide.
pub const DEFAULT_SLIDE_TITLE: &str = "Generated Presentation";

/// Binary document formats Schriftwerk can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    /// Office Open XML workbook.
    Spreadsheet,
    /// Office Open XML word-processing document.
    WordDocument,
    /// Office Open XML presentation.
    SlideDeck,
}

impl DocumentFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Spreadsheet => "xlsx",
            Self::WordDocument => "docx",
            Self::SlideDeck => "pptx",
        }
    }

    /// MIME type of the generated artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            Self::WordDocument => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::SlideDeck => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// Infer the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "xlsx" => Some(Self::Spreadsheet),
            "docx" => Some(Self::WordDocument),
            "pptx" => Some(Self::SlideDeck),
            _ => None,
        }
    }
}

/// Standard paper sizes for PDF output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
}

impl PaperSize {
    /// Parse a paper size name such as `letter` or `A4`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(Self::A4),
            "letter" => Some(Self::Letter),
            "legal" => Some(Self::Legal),
            _ => None,
        }
    }

    /// Dimensions in PostScript points (width, height).
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
        }
    }

    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        (w * 25.4 / 72.0, h * 25.4 / 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_8_5_by_11_inches() {
        let (w, h) = PaperSize::Letter.dimensions_mm();
        assert!((w - 215.9).abs() < 0.01);
        assert!((h - 279.4).abs() < 0.01);
    }

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(DocumentFormat::from_extension("PPTX"), Some(DocumentFormat::SlideDeck));
        assert_eq!(DocumentFormat::from_extension("txt"), None);
        assert_eq!(DocumentFormat::Spreadsheet.extension(), "xlsx");
    }
}
