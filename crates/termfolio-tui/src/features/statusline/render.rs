use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use termfolio_core::Theme;
use unicode_width::UnicodeWidthStr;

use crate::common::Palette;

const KEY_HINTS: &str = "Tab complete · ↑↓ history · PgUp/PgDn scroll · Ctrl+C quit";

/// Renders the status line.
///
/// Hints are dropped first when the line is too narrow.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    theme: Theme,
    lines_below: usize,
    palette: &Palette,
) {
    let muted = Style::default().fg(palette.muted);
    let mut spans = vec![
        Span::styled("theme: ", muted),
        Span::styled(
            theme.name(),
            Style::default()
                .fg(palette.prompt)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if lines_below > 0 {
        spans.push(Span::styled(format!("  ↓ {lines_below} more"), muted));
    }

    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let hints_width = KEY_HINTS.width();
    if used + hints_width + 2 <= area.width as usize {
        let gap = area.width as usize - used - hints_width;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(KEY_HINTS, muted));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
    frame.render_widget(paragraph, area);
}
