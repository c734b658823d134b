//! Converts transcript entries into wrapped styled lines.
//!
//! Pure functions: the same entries, prompt and width always yield the same
//! lines, so line counts computed during `Frame` handling match what render
//! draws.

use termfolio_core::{Inline, Link, LinkKind, Output};

use super::state::TranscriptEntry;
use super::style::{Style, StyledLine};
use crate::common::text::wrap_styled_line;

const BULLET: &str = "• ";
const BULLET_WIDTH: usize = 2;

/// A line before wrapping, with the indent its continuations hang at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogicalLine {
    line: StyledLine,
    hang: usize,
}

/// Builds every transcript line for the given width.
///
/// Each entry is its echoed prompt line (when it has a command), then its
/// output, then one blank separator line.
pub fn build_lines(entries: &[TranscriptEntry], prompt: &str, width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    for entry in entries {
        for logical in entry_lines(entry, prompt) {
            lines.extend(wrap_styled_line(&logical.line, width, logical.hang));
        }
    }
    lines
}

fn entry_lines(entry: &TranscriptEntry, prompt: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();

    if let Some(command) = &entry.command {
        let mut line = StyledLine::empty();
        line.push(prompt, Style::Prompt);
        line.push(" ", Style::Plain);
        line.push(command, Style::Command);
        lines.push(LogicalLine { line, hang: 0 });
    }

    lines.extend(output_lines(&entry.output));
    lines.push(LogicalLine {
        line: StyledLine::empty(),
        hang: 0,
    });
    lines
}

fn output_lines(output: &Output) -> Vec<LogicalLine> {
    match output {
        Output::Text(spans) => {
            let mut line = StyledLine::empty();
            for span in spans {
                push_inline(&mut line, span);
            }
            vec![LogicalLine { line, hang: 0 }]
        }
        Output::Link(link) => {
            let mut line = StyledLine::empty();
            push_link(&mut line, link);
            vec![LogicalLine { line, hang: 0 }]
        }
        Output::List(items) => items.iter().flat_map(list_item_lines).collect(),
        Output::Composite(blocks) => blocks.iter().flat_map(output_lines).collect(),
    }
}

fn list_item_lines(item: &Output) -> Vec<LogicalLine> {
    output_lines(item)
        .into_iter()
        .enumerate()
        .map(|(idx, logical)| {
            let mut line = StyledLine::empty();
            if idx == 0 {
                line.push(BULLET, Style::Bullet);
            } else {
                line.push(&" ".repeat(BULLET_WIDTH), Style::Plain);
            }
            line.spans.extend(logical.line.spans);
            LogicalLine {
                line,
                hang: logical.hang + BULLET_WIDTH,
            }
        })
        .collect()
}

fn push_inline(line: &mut StyledLine, inline: &Inline) {
    match inline {
        Inline::Plain(text) => line.push(text, Style::Plain),
        Inline::Strong(text) => line.push(text, Style::Strong),
        Inline::Code(text) => line.push(text, Style::Code),
        Inline::Link(link) => push_link(line, link),
    }
}

/// A terminal cannot follow links, so the target is shown after the label.
fn push_link(line: &mut StyledLine, link: &Link) {
    line.push(&link.label, Style::Link);
    if link.kind != LinkKind::Mail && link.label != link.target {
        line.push(" <", Style::LinkTarget);
        line.push(&link.target, Style::LinkTarget);
        line.push(">", Style::LinkTarget);
    }
}
