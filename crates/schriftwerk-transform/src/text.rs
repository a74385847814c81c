// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stateless text transforms. Each takes the whole content and returns the
// replacement text; none of them can fail.
//
// Sentence boundaries are literal periods everywhere in this module, so
// decimals ("3.14") and abbreviations ("e.g.") are split like any sentence end.

use schriftwerk_core::{PAGINATE_EVERY, split_lines};

const REPHRASE_BANNER: &str = "**Rephrased version** (simple):\n\n";
const TABLE_HEADER: &str = "| Column1 | Column2 | Column3 |\n|---------|---------|---------|\n";
const TABLE_COLUMNS: usize = 3;
const FENCE: &str = "```";
const FORM_FEED: char = '\u{0C}';

/// Banner, then every period followed by "In other words,".
pub fn rephrase(content: &str) -> String {
    format!("{REPHRASE_BANNER}{}", content.replace('.', ". In other words,"))
}

/// Split on periods, trim and capitalise every fragment, rejoin with ". ".
///
/// A trailing period does not leave a dangling space behind it.
pub fn sentence_case(content: &str) -> String {
    let fragments: Vec<String> = content
        .split('.')
        .map(|fragment| capitalize(fragment.trim()))
        .collect();

    let mut out = fragments.join(". ");
    if fragments.len() > 1 && fragments.last().is_some_and(String::is_empty) {
        out.pop();
    }
    out
}

/// Title-case the first character, lowercase the rest.
fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Lowercasing the whole fragment keeps the final-sigma rule aware of the
    // first character; the first character's own lowercase form is then dropped.
    let lower = fragment.to_lowercase();
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();

    let mut out = String::with_capacity(fragment.len());
    push_titlecase(&mut out, first);
    out.push_str(&lower[skip..]);
    out
}

/// Uppercase every cased character that follows an uncased one and lowercase
/// the others. Apostrophes count as uncased, so "don't" becomes "Don'T".
/// Word starts use the title-case form, so "ǆemal" becomes "ǅemal" and
/// "ßa" becomes "Ssa".
pub fn title_case(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut previous_is_cased = false;

    for ch in content.chars() {
        if ch.is_uppercase() || is_titlecase(ch) {
            if previous_is_cased {
                out.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut out, ch);
            }
            previous_is_cased = true;
        } else if ch.is_lowercase() {
            if previous_is_cased {
                out.push(ch);
            } else {
                push_titlecase(&mut out, ch);
            }
            previous_is_cased = true;
        } else {
            out.push(ch);
            previous_is_cased = false;
        }
    }

    out
}

/// Letters of general category Lt: neither uppercase nor lowercase.
fn is_titlecase(ch: char) -> bool {
    matches!(
        ch as u32,
        0x01C5 | 0x01C8 | 0x01CB | 0x01F2
            | 0x1F88..=0x1F8F
            | 0x1F98..=0x1F9F
            | 0x1FA8..=0x1FAF
            | 0x1FBC
            | 0x1FCC
            | 0x1FFC
    )
}

/// Append the full title-case mapping of `ch`.
///
/// Where it differs from uppercase the table below covers it; otherwise it is
/// the first character of the uppercase form followed by the lowercase of the
/// rest ("ß" -> "Ss", "ﬁ" -> "Fi").
fn push_titlecase(out: &mut String, ch: char) {
    if let Some(mapped) = single_titlecase(ch) {
        out.push(mapped);
        return;
    }
    if let Some(mapped) = multi_titlecase(ch) {
        out.push_str(mapped);
        return;
    }

    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
        out.extend(upper.flat_map(char::to_lowercase));
    }
}

fn single_titlecase(ch: char) -> Option<char> {
    let code = ch as u32;
    let mapped = match code {
        0x01C4..=0x01C6 => 0x01C5,
        0x01C7..=0x01C9 => 0x01C8,
        0x01CA..=0x01CC => 0x01CB,
        0x01F1..=0x01F3 => 0x01F2,
        // Greek with ypogegrammeni: 1F80..1F87 -> 1F88..1F8F and so on.
        0x1F80..=0x1FAF => code | 0x08,
        0x1FB3 | 0x1FBC => 0x1FBC,
        0x1FC3 | 0x1FCC => 0x1FCC,
        0x1FF3 | 0x1FFC => 0x1FFC,
        _ => return None,
    };
    char::from_u32(mapped)
}

fn multi_titlecase(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        '\u{0149}' => "\u{02BC}N",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(mapped)
}

/// Invert the case of every cased character.
pub fn swap_case(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for ch in content.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Newline-terminate every line and add a form feed after every 30th.
pub fn paginate(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + content.len() / 64);
    for (idx, line) in split_lines(content).into_iter().enumerate() {
        out.push_str(line);
        out.push('\n');
        if (idx + 1) % PAGINATE_EVERY == 0 {
            out.push(FORM_FEED);
        }
    }
    out
}

/// Re-join each line's whitespace-separated tokens with tabs.
pub fn columnize(content: &str) -> String {
    split_lines(content)
        .into_iter()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown table with a fixed three-column header and one row per line,
/// holding that line's first three tokens.
pub fn tabulate(content: &str) -> String {
    let mut table = String::from(TABLE_HEADER);
    for line in split_lines(content) {
        let cols: Vec<&str> = line.split_whitespace().take(TABLE_COLUMNS).collect();
        table.push_str("| ");
        table.push_str(&cols.join(" | "));
        table.push_str(" |\n");
    }
    table
}

/// Wrap the whole content in a triple-backtick fence.
pub fn code_fence(content: &str) -> String {
    format!("{FENCE}\n{content}\n{FENCE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_lines(n: usize) -> String {
        (1..=n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn swap_case_twice_is_identity_for_alphabetic_text() {
        let text = "HelloWorldABCxyz";
        assert_eq!(swap_case(&swap_case(text)), text);
        assert_eq!(swap_case(text), "hELLOwORLDabcXYZ");
    }

    #[test]
    fn swap_case_leaves_uncased_characters() {
        assert_eq!(swap_case("a1-B 2"), "A1-b 2");
    }

    #[test]
    fn code_fence_strips_back_to_the_input() {
        let text = "fn main() {}\n\nlet x = 1;";
        let fenced = code_fence(text);
        let inner = fenced
            .strip_prefix("```\n")
            .and_then(|rest| rest.strip_suffix("\n```"))
            .unwrap();
        assert_eq!(inner, text);
    }

    #[test]
    fn paginate_sixty_lines_has_two_breaks() {
        let out = paginate(&numbered_lines(60));
        assert_eq!(out.matches('\u{0C}').count(), 2);
        assert!(out.contains("line 30\n\u{0C}line 31\n"));
        assert!(out.ends_with("line 60\n\u{0C}"));
    }

    #[test]
    fn paginate_short_input_has_no_breaks() {
        assert_eq!(paginate("a\nb"), "a\nb\n");
        assert_eq!(paginate(""), "");
    }

    #[test]
    fn tabulate_keeps_first_three_tokens() {
        let table = tabulate("a b c d");
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows[0], "| Column1 | Column2 | Column3 |");
        assert_eq!(rows[1], "|---------|---------|---------|");
        assert_eq!(rows[2], "| a | b | c |");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn tabulate_short_and_empty_lines() {
        let table = tabulate("x y\n\nz");
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(rows, vec!["| x | y |", "|  |", "| z |"]);
    }

    #[test]
    fn sentence_case_capitalises_each_sentence() {
        assert_eq!(
            sentence_case("hello world. this is a test."),
            "Hello world. This is a test."
        );
    }

    #[test]
    fn sentence_case_lowercases_the_rest_of_each_fragment() {
        assert_eq!(sentence_case("SHOUTING here. whisper"), "Shouting here. Whisper");
    }

    #[test]
    fn sentence_case_splits_decimals() {
        assert_eq!(sentence_case("pi is 3.14"), "Pi is 3. 14");
    }

    #[test]
    fn sentence_case_uses_title_case_for_the_first_letter() {
        assert_eq!(sentence_case("ßa. ǆemal"), "Ssa. ǅemal");
        assert_eq!(sentence_case("ﬁne"), "Fine");
        assert_eq!(sentence_case("ΟΔΟΣ"), "Οδος");
    }

    #[test]
    fn title_case_uses_title_case_forms() {
        assert_eq!(title_case("ßa ǆ ǅEMAL"), "Ssa ǅ ǅemal");
        assert_eq!(title_case("ᾳ ŉ"), "ᾼ ʼN");
        assert_eq!(title_case("xǅ"), "Xǆ");
    }

    #[test]
    fn title_case_follows_cased_runs() {
        assert_eq!(title_case("hello wORLD"), "Hello World");
        assert_eq!(title_case("they're 1st"), "They'Re 1St");
    }

    #[test]
    fn rephrase_prefixes_banner_and_rewrites_periods() {
        assert_eq!(
            rephrase("One. Two."),
            "**Rephrased version** (simple):\n\nOne. In other words, Two. In other words,"
        );
    }

    #[test]
    fn form_feed_counts_as_a_line_break() {
        assert_eq!(columnize("a\n\u{0C}b"), "a\n\nb");
        assert_eq!(paginate("x\n\u{0C}y"), "x\n\ny\n");
        let binding = tabulate("a b\u{2028}c");
        let rows: Vec<&str> = binding.lines().skip(2).collect();
        assert_eq!(rows, vec!["| a | b |", "| c |"]);
    }

    #[test]
    fn repaginating_reads_the_form_feed_as_an_empty_line() {
        let once = paginate(&numbered_lines(30));
        // 30 lines, then the form feed closes an empty 31st line.
        let twice = paginate(&once);
        assert!(twice.starts_with("line 1\n"));
        assert!(twice.ends_with("line 30\n\u{0C}\n"));
    }

    #[test]
    fn columnize_uses_tabs_between_tokens() {
        assert_eq!(columnize("a  b   c\n d e "), "a\tb\tc\nd\te");
    }
}
