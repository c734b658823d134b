//! Text utilities for TUI rendering.
//!
//! Shared text processing functions used across rendering paths.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::features::transcript::{Style, StyledLine};

/// Flattens pasted text to a single input line.
///
/// Strips ANSI escapes (removes `\x1b` to break sequences) and turns tabs,
/// carriage returns and newlines into spaces.
pub fn sanitize_for_input(s: &str) -> Cow<'_, str> {
    if s.contains(['\x1b', '\t', '\r', '\n']) {
        Cow::Owned(
            s.replace('\x1b', "")
                .replace("\r\n", " ")
                .replace(['\t', '\r', '\n'], " "),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Returns the longest suffix of `text` that fits in `max_width` columns.
///
/// Used to keep the end of a long input line (where the cursor is) visible.
pub fn tail_fitting(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    &text[start..]
}

/// Splits text into alternating runs of whitespace and non-whitespace.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (idx, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != is_space) {
            runs.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

fn hanging_line(hang: usize) -> (StyledLine, usize) {
    let mut line = StyledLine::empty();
    if hang > 0 {
        line.push(&" ".repeat(hang), Style::Plain);
    }
    (line, hang)
}

/// Word-wraps a styled line to `width` columns (unicode-aware).
///
/// Continuation lines are indented by `hang` columns so list items stay
/// aligned under their bullet. Words wider than a line are hard-broken.
pub fn wrap_styled_line(line: &StyledLine, width: usize, hang: usize) -> Vec<StyledLine> {
    if width == 0 {
        return vec![line.clone()];
    }
    let hang = hang.min(width / 2);

    let mut wrapped = Vec::new();
    let mut current = StyledLine::empty();
    let mut current_width = 0;

    for span in &line.spans {
        for run in split_runs(&span.text) {
            let run_width = run.width();
            if current_width + run_width <= width {
                current.push(run, span.style);
                current_width += run_width;
                continue;
            }

            if run.chars().all(char::is_whitespace) {
                // Break at the space and drop it.
                wrapped.push(std::mem::take(&mut current));
                (current, current_width) = hanging_line(hang);
                continue;
            }

            if current_width > hang {
                current.trim_end();
                wrapped.push(std::mem::take(&mut current));
                (current, current_width) = hanging_line(hang);
            }

            for ch in run.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > hang {
                    wrapped.push(std::mem::take(&mut current));
                    (current, current_width) = hanging_line(hang);
                }
                current.push_char(ch, span.style);
                current_width += ch_width;
            }
        }
    }

    wrapped.push(current);
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> StyledLine {
        let mut line = StyledLine::empty();
        line.push(text, Style::Plain);
        line
    }

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_sanitize_for_input_flattens_lines() {
        let result = sanitize_for_input("one\r\ntwo\tthree\nfour");
        assert_eq!(result, "one two three four");
    }

    #[test]
    fn test_sanitize_for_input_strips_escape() {
        let result = sanitize_for_input("\x1b[31mred");
        assert_eq!(result, "[31mred");
    }

    #[test]
    fn test_sanitize_for_input_clean_is_borrowed() {
        let result = sanitize_for_input("clean text");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_tail_fitting() {
        assert_eq!(tail_fitting("hello", 10), "hello");
        assert_eq!(tail_fitting("hello world", 5), "world");
        assert_eq!(tail_fitting("hello", 0), "");
    }

    #[test]
    fn test_tail_fitting_wide_chars() {
        // Each CJK character takes two columns.
        assert_eq!(tail_fitting("ab中文", 4), "中文");
        assert_eq!(tail_fitting("ab中文", 3), "文");
    }

    #[test]
    fn test_wrap_short_line_unchanged() {
        let wrapped = wrap_styled_line(&plain("hello world"), 20, 0);
        assert_eq!(texts(&wrapped), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        let wrapped = wrap_styled_line(&plain("the quick brown fox"), 10, 0);
        assert_eq!(texts(&wrapped), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_applies_hanging_indent() {
        let wrapped = wrap_styled_line(&plain("• alpha beta gamma"), 12, 2);
        assert_eq!(texts(&wrapped), vec!["• alpha beta", "  gamma"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        let wrapped = wrap_styled_line(&plain("abcdefghij"), 4, 0);
        assert_eq!(texts(&wrapped), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_drops_trailing_space_at_break() {
        let wrapped = wrap_styled_line(&plain("alpha beta gamma"), 12, 0);
        assert_eq!(texts(&wrapped), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_wrap_keeps_styles_across_breaks() {
        let mut line = StyledLine::empty();
        line.push("name", Style::Strong);
        line.push(": a description", Style::Plain);
        let wrapped = wrap_styled_line(&line, 12, 0);
        assert_eq!(texts(&wrapped), vec!["name: a", "description"]);
        assert_eq!(wrapped[0].spans[0].style, Style::Strong);
        assert_eq!(wrapped[1].spans[0].style, Style::Plain);
    }
}
