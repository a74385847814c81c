// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the interactive shell.
//
// Every failure is folded into one of three kinds, each with its own line of
// text. The run ends after the message is shown.

use crate::error::SchriftwerkError;

/// What the user is told went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source path does not name a readable file.
    SourceNotFound,
    /// Reading or writing failed (permissions, disk space, missing directory).
    Io,
    /// Anything else, reported with the underlying message.
    Unexpected,
}

/// A failure rendered for display.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub kind: FailureKind,
    /// The single line printed to the user.
    pub message: String,
}

/// Convert a `SchriftwerkError` into the line the user sees.
pub fn humanize_error(err: &SchriftwerkError) -> HumanError {
    match err {
        SchriftwerkError::SourceNotFound { path } => HumanError {
            kind: FailureKind::SourceNotFound,
            message: format!(
                "❌ Error: The file '{path}' was not found. Please check the filename and try again."
            ),
        },

        SchriftwerkError::Io(_) => HumanError {
            kind: FailureKind::Io,
            message: "❌ Error: Unable to read or write files. Check file permissions or disk space."
                .into(),
        },

        SchriftwerkError::InvalidText(_)
        | SchriftwerkError::GrammarService(_)
        | SchriftwerkError::Spreadsheet(_)
        | SchriftwerkError::WordDocument(_)
        | SchriftwerkError::SlideDeck(_)
        | SchriftwerkError::Serialization(_)
        | SchriftwerkError::Terminal(_) => HumanError {
            kind: FailureKind::Unexpected,
            message: format!("❌ An unexpected error occurred: {err}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_names_the_file() {
        let err = SchriftwerkError::SourceNotFound {
            path: "notes.txt".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.kind, FailureKind::SourceNotFound);
        assert!(human.message.contains("'notes.txt' was not found"));
    }

    #[test]
    fn io_errors_share_one_message() {
        let denied = SchriftwerkError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let missing_dir = SchriftwerkError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&denied).kind, FailureKind::Io);
        assert_eq!(humanize_error(&missing_dir).kind, FailureKind::Io);
        assert_eq!(humanize_error(&denied).message, humanize_error(&missing_dir).message);
    }

    #[test]
    fn grammar_failure_is_unexpected_with_detail() {
        let err = SchriftwerkError::GrammarService("connection refused".into());
        let human = humanize_error(&err);
        assert_eq!(human.kind, FailureKind::Unexpected);
        assert!(human.message.starts_with("❌ An unexpected error occurred: "));
        assert!(human.message.contains("connection refused"));
    }
}
