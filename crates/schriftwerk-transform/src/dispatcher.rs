// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operation dispatch.
//
// Text operations hand back the new text for the caller to write.
// Conversions write their document straight to the destination and say so.

use std::path::{Path, PathBuf};

use schriftwerk_core::PaperSize;
use schriftwerk_core::error::Result;
use schriftwerk_document::{PdfWriter, SlideDeck, SpreadsheetWriter, WordWriter};
use tracing::{info, instrument};

use crate::grammar::{self, GrammarChecker};
use crate::operation::Operation;
use crate::text;

/// Result of applying one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text the caller still has to write to the destination.
    Text(String),
    /// A document was already written at this path.
    Persisted(PathBuf),
}

/// Applies menu operations to file content.
pub struct Dispatcher<'a> {
    grammar: &'a dyn GrammarChecker,
    paper_size: PaperSize,
}

impl<'a> Dispatcher<'a> {
    pub fn new(grammar: &'a dyn GrammarChecker) -> Self {
        Self {
            grammar,
            paper_size: PaperSize::Letter,
        }
    }

    /// Paper size used for PDF conversion.
    pub fn with_paper_size(mut self, paper_size: PaperSize) -> Self {
        self.paper_size = paper_size;
        self
    }

    /// Apply `operation` to `content`. Conversions write to `destination`;
    /// text operations ignore it.
    #[instrument(skip(self, content), fields(content_len = content.len(), destination = %destination.display()))]
    pub fn apply(&self, content: &str, operation: Operation, destination: &Path) -> Result<Outcome> {
        info!(?operation, "Applying operation");

        let rewritten = match operation {
            Operation::CorrectGrammar => grammar::correct(self.grammar, content)?,
            Operation::Rephrase => text::rephrase(content),
            Operation::UpperCase => content.to_uppercase(),
            Operation::LowerCase => content.to_lowercase(),
            Operation::SentenceCase => text::sentence_case(content),
            Operation::TitleCase => text::title_case(content),
            Operation::SwapCase => text::swap_case(content),
            Operation::Paginate => text::paginate(content),
            Operation::Columnize => text::columnize(content),
            Operation::Tabulate => text::tabulate(content),
            Operation::CodeFence => text::code_fence(content),
            Operation::Passthrough => content.to_string(),

            Operation::ToPdf => {
                PdfWriter::new(self.paper_size).write_text_to_file(content, destination)?;
                return Ok(Outcome::Persisted(destination.to_path_buf()));
            }
            Operation::ToSpreadsheet => {
                SpreadsheetWriter::new().write_text_to_file(content, destination)?;
                return Ok(Outcome::Persisted(destination.to_path_buf()));
            }
            Operation::ToWordDocument => {
                WordWriter::new().write_text_to_file(content, destination)?;
                return Ok(Outcome::Persisted(destination.to_path_buf()));
            }
            Operation::ToSlides => {
                SlideDeck::from_text(content).write_to_file(destination)?;
                return Ok(Outcome::Persisted(destination.to_path_buf()));
            }
        };

        Ok(Outcome::Text(rewritten))
    }
}
