// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Word document writer: one paragraph per text line, packed as DOCX by `docx-rs`.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};
use schriftwerk_core::error::{Result, SchriftwerkError};
use schriftwerk_core::{DocumentFormat, split_lines};
use tracing::{debug, instrument};

/// Creates word-processing documents from text.
#[derive(Default)]
pub struct WordWriter;

impl WordWriter {
    pub fn new() -> Self {
        Self
    }

    /// Build the DOCX package in memory.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn create_from_text(&self, text: &str) -> Result<Vec<u8>> {
        let lines = split_lines(text);

        let docx = lines.iter().fold(Docx::new(), |docx, line| {
            let paragraph = if line.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*line))
            };
            docx.add_paragraph(paragraph)
        });

        debug!(paragraphs = lines.len(), "Document body built");

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|err| SchriftwerkError::WordDocument(err.to_string()))?;

        Ok(buffer.into_inner())
    }

    /// Build the document and write it directly to a file.
    pub fn write_text_to_file(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_text(text)?;
        crate::package::persist(&bytes, path.as_ref(), DocumentFormat::WordDocument)
    }
}
