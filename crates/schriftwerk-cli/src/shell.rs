// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive session: ask for a source file, an operation and a destination,
// run the operation, report the result.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use schriftwerk_core::{DocumentFormat, SchriftwerkError};
use schriftwerk_core::error::Result;
use schriftwerk_core::human_errors::{HumanError, humanize_error};
use schriftwerk_transform::{Dispatcher, Operation, Outcome};
use tracing::{debug, info, warn};

const SOURCE_PROMPT: &str = "Enter the source filename (with extension): ";
const CHOICE_PROMPT: &str = "\nEnter the number of your choice: ";
const TEXT_DESTINATION_PROMPT: &str = "Enter the destination filename to save (with extension): ";
const DOCUMENT_DESTINATION_PROMPT: &str =
    "Enter the destination filename with proper extension (.pdf, .xlsx, .docx, .pptx): ";

/// How a session ended.
#[derive(Debug)]
pub enum Report {
    /// The destination was written.
    Saved(String),
    /// The run stopped with this message shown to the user.
    Failed(HumanError),
}

/// One interactive run over arbitrary input and output streams.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    dispatcher: Dispatcher<'a>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, dispatcher: Dispatcher<'a>) -> Self {
        Self {
            input,
            output,
            dispatcher,
        }
    }

    /// Run the session to completion and print its outcome.
    ///
    /// Failures of the run itself are reported to the user and returned in the
    /// `Report`; `Err` means the outcome could not be printed at all.
    pub fn run(&mut self) -> io::Result<Report> {
        let report = match self.session() {
            Ok(destination) => {
                writeln!(
                    self.output,
                    "\n✅ Successfully modified and saved to '{destination}'."
                )?;
                Report::Saved(destination)
            }
            Err(err) => {
                warn!(error = %err, "session failed");
                let human = humanize_error(&err);
                writeln!(self.output, "{}", human.message)?;
                Report::Failed(human)
            }
        };
        self.output.flush()?;
        Ok(report)
    }

    fn session(&mut self) -> Result<String> {
        let source = self.prompt(SOURCE_PROMPT)?;
        let content = read_source(Path::new(&source))?;
        debug!(source = %source, chars = content.chars().count(), "source loaded");

        self.show_menu()?;
        let choice = self.prompt(CHOICE_PROMPT)?;
        let operation = Operation::from_choice(&choice);

        let destination_prompt = if operation.is_conversion() {
            DOCUMENT_DESTINATION_PROMPT
        } else {
            TEXT_DESTINATION_PROMPT
        };
        let destination = self.prompt(destination_prompt)?;
        let destination_path = PathBuf::from(&destination);
        warn_on_extension_mismatch(operation, &destination_path);

        match self.dispatcher.apply(&content, operation, &destination_path)? {
            Outcome::Text(text) => {
                std::fs::write(&destination_path, text)?;
                info!(destination = %destination, "text written");
            }
            Outcome::Persisted(path) => {
                info!(destination = %path.display(), "document generated");
            }
        }

        Ok(destination)
    }

    fn show_menu(&mut self) -> Result<()> {
        let mut menu = String::from("\nWhat modification would you like to apply?\n");
        for (number, op) in Operation::ALL.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", number + 1, op.menu_label()));
        }
        self.output
            .write_all(menu.as_bytes())
            .map_err(SchriftwerkError::Terminal)
    }

    /// Print `text` and read one line of input without its line terminator.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}").map_err(SchriftwerkError::Terminal)?;
        self.output.flush().map_err(SchriftwerkError::Terminal)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(SchriftwerkError::Terminal)?;
        if read == 0 {
            return Err(SchriftwerkError::Terminal(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "EOF when reading a line",
            )));
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

/// Conversions accept any destination name; a mismatched extension is only logged.
fn warn_on_extension_mismatch(operation: Operation, destination: &Path) {
    let Some(expected) = operation.target_format() else {
        return;
    };
    let actual = destination
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentFormat::from_extension);
    if actual != Some(expected) {
        warn!(
            destination = %destination.display(),
            expected = operation.expected_extension().unwrap_or_default(),
            "destination extension does not match the generated format"
        );
    }
}

/// Read the whole source file as text with newlines normalised to `\n`.
fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SchriftwerkError::SourceNotFound {
            path: path.display().to_string(),
        },
        _ => SchriftwerkError::Io(err),
    })?;

    let text = String::from_utf8(bytes).map_err(|err| SchriftwerkError::InvalidText(err.to_string()))?;
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}
