//! Input line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::state::InputState;
use crate::common::Palette;
use crate::common::text::tail_fitting;

/// Renders `<prompt> <buffer>` and places the cursor after the buffer.
///
/// A buffer wider than the line scrolls horizontally so its end stays visible.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    input: &InputState,
    prompt: &str,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let prefix = format!("{prompt} ");
    let prefix = tail_fitting(&prefix, (area.width as usize).saturating_sub(1));
    let prefix_width = prefix.width();
    // Keep one column free for the cursor.
    let available = (area.width as usize).saturating_sub(prefix_width + 1);
    let visible = tail_fitting(input.as_str(), available);

    let line = Line::from(vec![
        Span::styled(
            prefix.to_string(),
            Style::default()
                .fg(palette.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(visible.to_string(), Style::default().fg(palette.foreground)),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(palette.background));
    frame.render_widget(paragraph, area);

    let cursor_x = area.x + (prefix_width + visible.width()) as u16;
    frame.set_cursor_position((cursor_x, area.y));
}
