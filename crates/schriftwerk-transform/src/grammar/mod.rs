// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grammar and spelling correction.
//
// A checker reports matches against the text; applying them is done here so
// every checker shares the same replacement rules.

pub mod languagetool;

use schriftwerk_core::error::Result;
use tracing::debug;

/// A single problem reported by a grammar checker.
///
/// `offset` and `length` count UTF-16 code units, the unit LanguageTool uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMatch {
    pub offset: usize,
    pub length: usize,
    /// Suggested replacements, best first. May be empty.
    pub replacements: Vec<String>,
    pub message: String,
    pub rule_id: Option<String>,
}

/// Something that can find grammar and spelling problems in text.
pub trait GrammarChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>>;
}

/// Check `text` and apply every suggested correction.
pub fn correct(checker: &dyn GrammarChecker, text: &str) -> Result<String> {
    let matches = checker.check(text)?;
    debug!(matches = matches.len(), "Grammar check complete");
    Ok(apply_corrections(text, &matches))
}

/// Replace each matched span with its first suggestion.
///
/// Matches are applied in offset order. A match without suggestions, one that
/// overlaps an earlier applied match, or one whose span does not land on
/// character boundaries is skipped.
pub fn apply_corrections(text: &str, matches: &[GrammarMatch]) -> String {
    let offsets = Utf16Offsets::new(text);

    let mut ordered: Vec<&GrammarMatch> = matches
        .iter()
        .filter(|m| !m.replacements.is_empty())
        .collect();
    ordered.sort_by_key(|m| m.offset);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in ordered {
        let (Some(start), Some(end)) = (
            offsets.byte_index(m.offset),
            offsets.byte_index(m.offset + m.length),
        ) else {
            debug!(offset = m.offset, length = m.length, "Match span out of range, skipped");
            continue;
        };
        if start < cursor {
            continue;
        }

        out.push_str(&text[cursor..start]);
        out.push_str(&m.replacements[0]);
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Maps UTF-16 code unit positions to byte positions in a `str`.
struct Utf16Offsets {
    /// `(utf16_position, byte_position)` for every character start plus the end.
    boundaries: Vec<(usize, usize)>,
}

impl Utf16Offsets {
    fn new(text: &str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut utf16_pos = 0;
        for (byte_pos, ch) in text.char_indices() {
            boundaries.push((utf16_pos, byte_pos));
            utf16_pos += ch.len_utf16();
        }
        boundaries.push((utf16_pos, text.len()));
        Self { boundaries }
    }

    fn byte_index(&self, utf16_pos: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&utf16_pos, |&(u, _)| u)
            .ok()
            .map(|idx| self.boundaries[idx].1)
    }
}
