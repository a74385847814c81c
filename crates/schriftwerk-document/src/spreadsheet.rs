// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spreadsheet writer: one text line per row in a single `Content` column,
// serialised as XLSX with `rust_xlsxwriter`.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};
use schriftwerk_core::error::{Result, SchriftwerkError};
use schriftwerk_core::{DocumentFormat, split_lines};
use tracing::{debug, instrument};

/// Creates single-column workbooks from text.
pub struct SpreadsheetWriter {
    header: String,
}

impl Default for SpreadsheetWriter {
    fn default() -> Self {
        Self {
            header: "Content".into(),
        }
    }
}

impl SpreadsheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the workbook in memory.
    ///
    /// Row 1 holds the column header; each following row holds one line.
    /// Blank lines leave their cell empty.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn create_from_text(&self, text: &str) -> Result<Vec<u8>> {
        let lines = split_lines(text);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, &self.header).map_err(xlsx_error)?;

        for (idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let row = u32::try_from(idx + 1).map_err(|_| {
                SchriftwerkError::Spreadsheet(format!("too many lines for one sheet: {}", lines.len()))
            })?;
            sheet.write_string(row, 0, *line).map_err(xlsx_error)?;
        }

        debug!(rows = lines.len(), "Worksheet populated");

        workbook.save_to_buffer().map_err(xlsx_error)
    }

    /// Build the workbook and write it directly to a file.
    pub fn write_text_to_file(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_text(text)?;
        crate::package::persist(&bytes, path.as_ref(), DocumentFormat::Spreadsheet)
    }
}

fn xlsx_error(err: XlsxError) -> SchriftwerkError {
    SchriftwerkError::Spreadsheet(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn header_and_lines_land_in_the_workbook() {
        let bytes = SpreadsheetWriter::new()
            .create_from_text("first row\nsecond row")
            .unwrap();
        let strings = part(&bytes, "xl/sharedStrings.xml");
        assert!(strings.contains("Content"));
        assert!(strings.contains("first row"));
        assert!(strings.contains("second row"));
    }

    #[test]
    fn rows_follow_line_order() {
        let bytes = SpreadsheetWriter::new().create_from_text("a\n\nb").unwrap();
        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"r="A1""#));
        assert!(sheet.contains(r#"r="A2""#));
        assert!(!sheet.contains(r#"r="A3""#));
        assert!(sheet.contains(r#"r="A4""#));
    }

    #[test]
    fn writes_to_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        SpreadsheetWriter::new().write_text_to_file("x", &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
