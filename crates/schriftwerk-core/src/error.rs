// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Schriftwerk.

use thiserror::Error;

/// Top-level error type for all Schriftwerk operations.
#[derive(Debug, Error)]
pub enum SchriftwerkError {
    // -- Source file --
    #[error("source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("source file is not valid UTF-8 text: {0}")]
    InvalidText(String),

    // -- Grammar service --
    #[error("grammar service failed: {0}")]
    GrammarService(String),

    // -- Document errors --
    #[error("spreadsheet generation failed: {0}")]
    Spreadsheet(String),

    #[error("word document generation failed: {0}")]
    WordDocument(String),

    #[error("slide deck generation failed: {0}")]
    SlideDeck(String),

    // -- Storage / terminal --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("terminal input failed: {0}")]
    Terminal(std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SchriftwerkError>;
