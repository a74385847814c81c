// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line splitting shared by the line-oriented transforms and document writers.

/// Characters that end a line on their own. `\r\n` is handled as one boundary.
fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0B}' // vertical tab
            | '\u{0C}' // form feed
            | '\u{1C}'..='\u{1E}' // file, group and record separators
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines at every line boundary: `\n`, `\r\n`, `\r`, vertical
/// tab, form feed, the information separators `\x1c`..`\x1e`, NEL, and the
/// Unicode line and paragraph separators.
///
/// Terminators are not included. A trailing terminator does not produce a
/// final empty line, and empty input yields no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(split_lines("one\r\ntwo\rthree\nfour"), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn form_feed_ends_a_line() {
        assert_eq!(split_lines("a\n\u{0C}b"), vec!["a", "", "b"]);
        assert_eq!(split_lines("x\u{0C}"), vec!["x"]);
    }

    #[test]
    fn unicode_separators_end_a_line() {
        assert_eq!(split_lines("one\u{2028}two\u{2029}three\u{85}four"), vec!["one", "two", "three", "four"]);
        assert_eq!(split_lines("a\u{0B}b\u{1C}c\u{1E}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn carriage_return_before_other_boundary_is_its_own_line() {
        assert_eq!(split_lines("a\r\u{0C}b"), vec!["a", "", "b"]);
    }

    #[test]
    fn other_control_characters_stay_inside_lines() {
        assert_eq!(split_lines("a\tb\u{1F}c"), vec!["a\tb\u{1F}c"]);
    }
}
