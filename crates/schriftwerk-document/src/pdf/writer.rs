// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer: draw plain text onto pages using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use schriftwerk_core::error::Result;
use schriftwerk_core::{DocumentFormat, PaperSize, split_lines};
use tracing::{debug, info, instrument};

/// Distance from the left edge and from the top edge to the first baseline.
const MARGIN_PT: f32 = 40.0;
/// Lines stop once the next baseline would fall below this height.
const BOTTOM_LIMIT_PT: f32 = 40.0;
const LINE_HEIGHT_PT: f32 = 15.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Creates PDF documents from text content, one source line per drawn line.
///
/// Lines are not wrapped; anything wider than the page runs off the right edge.
pub struct PdfWriter {
    /// Paper size for page creation.
    paper_size: PaperSize,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            title: None,
        }
    }

    /// Create a new writer defaulting to US Letter.
    pub fn letter() -> Self {
        Self::new(PaperSize::Letter)
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// How many lines fit on one page of the configured paper size.
    pub fn lines_per_page(&self) -> usize {
        let (_, page_h_pt) = self.paper_size.dimensions_pt();
        let first_baseline = page_h_pt - MARGIN_PT;
        ((first_baseline - BOTTOM_LIMIT_PT) / LINE_HEIGHT_PT) as usize + 1
    }

    // -- Text to PDF ----------------------------------------------------------

    /// Create a PDF from plain text content.
    ///
    /// Each line is drawn in Helvetica starting near the top-left corner and
    /// moving down a fixed step. A new page starts when the cursor drops below
    /// the bottom limit. Empty text still produces one blank page.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn create_from_text(&self, text: &str) -> Result<Vec<u8>> {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        let (page_w, page_h) = (Mm(w_mm), Mm(h_mm));
        let (_, page_h_pt) = self.paper_size.dimensions_pt();
        let title = self.title.as_deref().unwrap_or("Schriftwerk Document");

        info!(paper = ?self.paper_size, title, "Creating text PDF");

        let lines = split_lines(text);
        let top_pt = page_h_pt - MARGIN_PT;

        let mut doc = PdfDocument::new(title);
        let mut pages: Vec<PdfPage> = Vec::new();
        let mut ops: Vec<Op> = Vec::new();
        let mut y_pt = top_pt;

        for line in &lines {
            push_line(&mut ops, line, y_pt);
            y_pt -= LINE_HEIGHT_PT;

            if y_pt < BOTTOM_LIMIT_PT {
                pages.push(PdfPage::new(page_w, page_h, std::mem::take(&mut ops)));
                y_pt = top_pt;
            }
        }

        // Flush the partly filled last page, or emit a blank one for empty input.
        if !ops.is_empty() || pages.is_empty() {
            pages.push(PdfPage::new(page_w, page_h, ops));
        }

        doc.with_pages(pages);

        debug!(
            total_lines = lines.len(),
            pages = doc.pages.len(),
            "Text layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(output)
    }

    // -- File output convenience ----------------------------------------------

    /// Create a text PDF and write it directly to a file.
    pub fn write_text_to_file(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_text(text)?;
        crate::package::persist(&bytes, path.as_ref(), DocumentFormat::Pdf)
    }
}

/// Append the operations that draw one line with its baseline at `y_pt`.
fn push_line(ops: &mut Vec<Op>, line: &str, y_pt: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(MARGIN_PT),
            y: Pt(y_pt),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(FONT_SIZE_PT),
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(line.to_string())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}
